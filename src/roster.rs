// src/roster.rs
// Roster-level operations over the store port: the save contract, the
// note-preservation merge, and the cross-class queries the browser view
// runs. A roster is always written whole; `notes` edits go through
// `notes::save_note` instead.

use serde_json::Value;

use crate::config::consts::NO_COURSE_SENTINEL;
use crate::page::PeoplePage;
use crate::store::{StoreMap, StorePort, StoreResult, LAST_SELECTED_KEY};
use crate::student::{parse_student, Roster};

/// Parse every currently-visible row. Page row order is roster order.
pub fn roster_from_page(page: &PeoplePage) -> Roster {
    page.rows.iter().map(parse_student).collect()
}

fn roster_from_value(v: &Value) -> Option<Roster> {
    serde_json::from_value(v.clone()).ok()
}

/// Roster for one class out of a whole-store snapshot.
pub fn roster_of(all: &StoreMap, class: &str) -> Option<Roster> {
    all.get(class).and_then(roster_from_value)
}

pub fn load_roster(store: &dyn StorePort, class: &str) -> StoreResult<Option<Roster>> {
    Ok(store.get(class)?.and_then(|v| roster_from_value(&v)))
}

pub fn store_roster(store: &mut dyn StorePort, class: &str, roster: &Roster) -> StoreResult<()> {
    let mut entries = StoreMap::new();
    entries.insert(s!(class), serde_json::to_value(roster)?);
    store.set(entries)
}

/// The save-roster operation. Resolves the class from the page breadcrumb;
/// an unresolved name or the no-course sentinel aborts with a user-facing
/// error and performs no write. Otherwise the stored roster for that class
/// is replaced in one whole-value write. Fresh parses carry empty `notes`;
/// with `carry_notes` the previous roster's notes are merged in by user id
/// before the write (the explicit preservation step both frontends use).
pub fn save_roster(
    store: &mut dyn StorePort,
    page: &PeoplePage,
    carry_notes: bool,
) -> StoreResult<(String, usize)> {
    let class = match page.course_name.as_deref() {
        Some(c) if !c.trim().is_empty() && c != NO_COURSE_SENTINEL => s!(c),
        _ => return Err("No course selected — open a course people page first".into()),
    };

    let mut roster = roster_from_page(page);
    if carry_notes {
        if let Some(old) = load_roster(&*store, &class)? {
            preserve_notes(&old, &mut roster);
        }
    }

    let count = roster.len();
    store_roster(store, &class, &roster)?;
    Ok((class, count))
}

/// Carry `notes` forward by user id. Only empty slots are filled; all
/// scraped fields stay exactly as parsed.
pub fn preserve_notes(old: &Roster, new: &mut Roster) {
    for rec in new.iter_mut() {
        if !rec.notes.is_empty() {
            continue;
        }
        if let Some(prev) = old.iter().find(|o| o.user_id == rec.user_id) {
            rec.notes = prev.notes.clone();
        }
    }
}

/* ---------------- read-side queries ---------------- */

/// Stored class names, reserved key excluded, sorted. A key only counts
/// as a class when its value has roster shape; foreign keys are ignored.
pub fn class_names(store: &dyn StorePort) -> StoreResult<Vec<String>> {
    Ok(class_names_of(&store.get_all()?))
}

pub fn class_names_of(all: &StoreMap) -> Vec<String> {
    let mut names: Vec<String> = all
        .iter()
        .filter(|(k, v)| k.as_str() != LAST_SELECTED_KEY && v.is_array())
        .map(|(k, _)| k.clone())
        .collect();
    names.sort();
    names
}

/// Other classes (than `current`) whose roster contains this user.
pub fn other_classes(all: &StoreMap, user_id: &str, current: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (class, v) in all {
        if class == LAST_SELECTED_KEY || class == current {
            continue;
        }
        if let Some(roster) = roster_from_value(v) {
            if roster.iter().any(|r| r.user_id == user_id) {
                out.push(class.clone());
            }
        }
    }
    out.sort();
    out
}

/// `(class, note)` pairs for this user from every other class where a
/// non-empty note exists.
pub fn previous_notes(all: &StoreMap, user_id: &str, current: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (class, v) in all {
        if class == LAST_SELECTED_KEY || class == current {
            continue;
        }
        if let Some(roster) = roster_from_value(v) {
            if let Some(rec) = roster.iter().find(|r| r.user_id == user_id) {
                if !rec.notes.is_empty() {
                    out.push((class.clone(), rec.notes.clone()));
                }
            }
        }
    }
    out.sort();
    out
}

/* ---------------- reserved key ---------------- */

pub fn last_selected(store: &dyn StorePort) -> StoreResult<Option<String>> {
    Ok(store
        .get(LAST_SELECTED_KEY)?
        .and_then(|v| v.as_str().map(|s| s.to_string())))
}

pub fn remember_selected(store: &mut dyn StorePort, class: &str) -> StoreResult<()> {
    let mut entries = StoreMap::new();
    entries.insert(s!(LAST_SELECTED_KEY), Value::String(s!(class)));
    store.set(entries)
}
