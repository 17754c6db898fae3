// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Numeric course id as it appears in the people-page URL.
    pub course: Option<u32>,
    /// Upper bound on paginated fetches for one roster.
    pub max_pages: u32,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            course: None,
            max_pages: MAX_ROSTER_PAGES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Emit the notes column. Notes go out as Markdown source, untouched.
    pub include_notes: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            include_notes: false,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self.format.ext();
        path.push(join!(stem, ".", ext));
        path
    }

    /// Parse GUI/CLI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
