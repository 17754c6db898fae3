// src/notes.rs
// The one data contract behind every note surface (tooltip preview,
// modal, detached editor, CLI prompt): read the whole roster, change
// exactly one record's `notes`, write the whole roster back. Cancel
// means simply not calling `save_note`. Last writer wins; the target
// environment has a single interactive user.

use crate::roster::{load_roster, store_roster};
use crate::store::{StorePort, StoreResult};

pub fn load_note(store: &dyn StorePort, class: &str, user_id: &str) -> StoreResult<Option<String>> {
    Ok(load_roster(store, class)?.and_then(|roster| {
        roster
            .into_iter()
            .find(|r| r.user_id == user_id)
            .map(|r| r.notes)
    }))
}

/// Returns false when the class or student is not in the store (nothing
/// written). All fields other than `notes` round-trip untouched.
pub fn save_note(
    store: &mut dyn StorePort,
    class: &str,
    user_id: &str,
    text: &str,
) -> StoreResult<bool> {
    let Some(mut roster) = load_roster(&*store, class)? else {
        return Ok(false);
    };
    let Some(rec) = roster.iter_mut().find(|r| r.user_id == user_id) else {
        return Ok(false);
    };

    rec.notes = s!(text);
    store_roster(store, class, &roster)?;
    Ok(true)
}
