// src/store.rs
//
// The key-value store collaborator behind a port trait, so operations can
// run against the JSON file in production and an in-memory fake in tests.
// No schema, no migrations: the store may hold arbitrary pre-existing
// keys, and whole-value overwrite is the only mutation primitive.

use std::{error::Error, fs, path::{Path, PathBuf}};

use serde_json::{Map, Value};

use crate::config::consts::{STORE_DIR, STORE_FILE};

pub type StoreMap = Map<String, Value>;
pub type StoreResult<T> = Result<T, Box<dyn Error>>;

/// Reserved key remembering the class last selected in the browser view.
pub const LAST_SELECTED_KEY: &str = "lastSelectedClass";

pub trait StorePort {
    /// The entire store.
    fn get_all(&self) -> StoreResult<StoreMap>;

    /// One key's value, if present.
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Merge `entries` over the store: each given key is overwritten
    /// wholesale, every other key survives untouched.
    fn set(&mut self, entries: StoreMap) -> StoreResult<()>;
}

/* ---------------- JSON file store ---------------- */

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn default_path() -> PathBuf {
        Path::new(STORE_DIR).join(STORE_FILE)
    }

    pub fn new() -> Self {
        Self { path: Self::default_path() }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> StoreResult<StoreMap> {
        if !self.path.exists() {
            return Ok(StoreMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(StoreMap::new());
        }
        match serde_json::from_str::<Value>(&text)? {
            Value::Object(map) => Ok(map),
            _ => Err(format!("Store file is not a JSON object: {}", self.path.display()).into()),
        }
    }

    fn write_map(&self, map: &StoreMap) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map.clone()))?)?;
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StorePort for FileStore {
    fn get_all(&self) -> StoreResult<StoreMap> {
        self.read_map()
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, entries: StoreMap) -> StoreResult<()> {
        let mut map = self.read_map()?;
        for (k, v) in entries {
            map.insert(k, v);
        }
        self.write_map(&map)
    }
}

/* ---------------- In-memory fake ---------------- */

/// Deterministic stand-in for tests and offline runs.
#[derive(Debug, Default)]
pub struct MemStore {
    map: StoreMap,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(map: StoreMap) -> Self {
        Self { map }
    }
}

impl StorePort for MemStore {
    fn get_all(&self) -> StoreResult<StoreMap> {
        Ok(self.map.clone())
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, entries: StoreMap) -> StoreResult<()> {
        for (k, v) in entries {
            self.map.insert(k, v);
        }
        Ok(())
    }
}
