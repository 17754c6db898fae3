// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the page cap (actual total is unknown).
    fn begin(&mut self, _max_pages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page fetch landed, with the rows it added.
    fn page_done(&mut self, _page: u32, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
