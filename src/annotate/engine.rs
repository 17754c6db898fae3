// src/annotate/engine.rs
//
// Idempotent row annotation. The engine owns the processed-id set; the
// marks never live on the rows themselves, so a second scan over the same
// page injects nothing and a row stub with an id is enough to test against.

use std::collections::HashSet;

use crate::config::consts::{CAMPUS_KEYWORD, SEARCH_ENDPOINT, SEARCH_LABEL, SEARCH_SITE};
use crate::core::sanitize::{encode_query, strip_parens};
use crate::page::{Cell, PeoplePage, RosterRow, SearchLink};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Rows that received a control this pass.
    pub injected: usize,
    /// Rows skipped by the marker check.
    pub already_marked: usize,
    /// Rows skipped without marking (no name, empty cleaned name, no cell);
    /// a later pass with better content may retry them.
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct Annotator {
    processed: HashSet<String>,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_marked(&self, user_id: &str) -> bool {
        self.processed.contains(user_id)
    }

    /// Full pass over every row of the page. Cheap to repeat: already
    /// marked rows cost one set lookup. Never fails; row trouble is
    /// per-row and silent.
    pub fn scan(&mut self, page: &mut PeoplePage) -> ScanStats {
        let mut stats = ScanStats::default();

        for row in &mut page.rows {
            if self.processed.contains(&row.user_id) {
                stats.already_marked += 1;
                continue;
            }
            if annotate_row(row) {
                // Mark only on successful injection; skipped rows stay
                // unmarked so a later pass can retry them.
                self.processed.insert(row.user_id.clone());
                stats.injected += 1;
            } else {
                stats.skipped += 1;
            }
        }

        stats
    }

    /// Forget all marks. Call when a new document replaces the page;
    /// marks are per page lifetime, not per store lifetime.
    pub fn reset(&mut self) {
        self.processed.clear();
    }
}

/// Inject one search link; false = skip (and don't mark).
fn annotate_row(row: &mut RosterRow) -> bool {
    let Some(raw) = row.raw_name.clone() else {
        return false;
    };
    let cleaned = strip_parens(&raw);
    if cleaned.is_empty() {
        return false;
    }

    let Some(cell) = target_cell(row) else {
        return false; // zero cells: no-op
    };

    let query = search_query(&cleaned);
    cell.links.push(SearchLink {
        href: search_url(&query),
        label: s!(SEARCH_LABEL),
        aria_label: format!("Search for {} on LinkedIn", raw.trim()),
    });
    true
}

/// Prefer the right-aligned cell; fall back to the last cell.
fn target_cell(row: &mut RosterRow) -> Option<&mut Cell> {
    if let Some(i) = row.cells.iter().position(|c| c.right_aligned) {
        return row.cells.get_mut(i);
    }
    row.cells.last_mut()
}

/// `"Last, First"` → `"First" "Last" <campus> site:linkedin.com`;
/// a comma-less name is used as a single token.
pub fn search_query(cleaned: &str) -> String {
    match cleaned.split_once(',') {
        Some((last, first)) => format!(
            "\"{}\" \"{}\" {} site:{}",
            first.trim(),
            last.trim(),
            CAMPUS_KEYWORD,
            SEARCH_SITE
        ),
        None => format!("\"{}\" {} site:{}", cleaned, CAMPUS_KEYWORD, SEARCH_SITE),
    }
}

pub fn search_url(query: &str) -> String {
    join!(SEARCH_ENDPOINT, &encode_query(query))
}
