// src/annotate/watcher.rs

use std::time::{Duration, Instant};

use crate::config::consts::DEBOUNCE_MS;
use crate::page::PeoplePage;

use super::{Annotator, Debouncer, ScanStats};

/// Ties the engine to a change-notification source for one watched page.
/// The contract mirrors a childList mutation observer: the caller reports
/// "child nodes were added", and after a short quiet period the whole
/// page is re-scanned from scratch: the marker set makes the full pass
/// cheap, and full re-scans never miss rows built incrementally.
///
/// Time is always passed in, never sampled here.
pub struct PageWatcher {
    annotator: Annotator,
    debounce: Debouncer,
}

impl PageWatcher {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            annotator: Annotator::new(),
            debounce: Debouncer::new(delay),
        }
    }

    /// Immediate full pass; use for the initial page load.
    pub fn scan_now(&mut self, page: &mut PeoplePage) -> ScanStats {
        self.annotator.scan(page)
    }

    /// Change notification: child nodes were added somewhere under the
    /// watched container. Other mutation kinds are not reported.
    pub fn children_added(&mut self, now: Instant) {
        self.debounce.signal(now);
    }

    /// Poll from the event loop; re-scans the entire page when the
    /// debounce window closes.
    pub fn tick(&mut self, page: &mut PeoplePage, now: Instant) -> Option<ScanStats> {
        if self.debounce.fire(now) {
            Some(self.annotator.scan(page))
        } else {
            None
        }
    }

    pub fn rescan_pending(&self) -> bool {
        self.debounce.pending()
    }

    pub fn is_marked(&self, user_id: &str) -> bool {
        self.annotator.is_marked(user_id)
    }

    /// A new document replaced the page; marks are per page lifetime.
    pub fn reset(&mut self) {
        self.annotator.reset();
    }
}

impl Default for PageWatcher {
    fn default() -> Self {
        Self::new()
    }
}
