// src/student.rs
// Pure row → record parsing. Deterministic for identical input; every
// field defaults independently, a record is never aborted.

use serde::{Deserialize, Serialize};

use crate::core::sanitize::{first_paren_group, strip_parens};
use crate::page::RosterRow;

/// Sentinel used when a row yields no usable name text.
pub const UNKNOWN_NAME: &str = "Unknown, Name";

/// One stored student. Field names serialize camelCase to match the
/// store layout (`userId`, `pfpUrl`, …). `notes` is the only field that
/// survives independently of a re-scrape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRecord {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub pronouns: String,
    pub role: String,
    pub pfp_url: String,
    pub notes: String,
}

impl StudentRecord {
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Ordered roster for one class, page row order.
pub type Roster = Vec<StudentRecord>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub last: String,
    pub pronouns: String,
}

/// `"Last, First (pronouns)"` → parts. Pronouns are the first
/// parenthesized group, verbatim. All parentheticals are stripped before
/// the split at the first comma; a comma-less name is one token, kept in
/// `first`. Empty input falls back to the `UNKNOWN_NAME` sentinel.
pub fn split_name(raw: &str) -> NameParts {
    let pronouns = first_paren_group(raw);
    let mut cleaned = strip_parens(raw);
    if cleaned.is_empty() {
        cleaned = s!(UNKNOWN_NAME);
    }

    match cleaned.split_once(',') {
        Some((last, first)) => NameParts {
            first: first.trim().to_string(),
            last: last.trim().to_string(),
            pronouns,
        },
        None => NameParts {
            first: cleaned,
            last: s!(),
            pronouns,
        },
    }
}

/// Build a record from one page row. Fresh parses always carry empty
/// `notes`; carrying old notes forward is the save caller's job.
pub fn parse_student(row: &RosterRow) -> StudentRecord {
    let parts = split_name(row.raw_name.as_deref().unwrap_or(""));
    StudentRecord {
        user_id: row.user_id.clone(),
        first_name: parts.first,
        last_name: parts.last,
        pronouns: parts.pronouns,
        role: row.role.clone(),
        pfp_url: row.pfp_url.clone(),
        notes: s!(),
    }
}
