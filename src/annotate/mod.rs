// src/annotate/mod.rs
mod debounce;
mod engine;
mod watcher;

pub use debounce::Debouncer;
pub use engine::{search_query, search_url, Annotator, ScanStats};
pub use watcher::PageWatcher;
