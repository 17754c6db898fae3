// tests/roster_store.rs
use std::fs;
use std::path::PathBuf;

use serde_json::json;

use canvas_roster::notes;
use canvas_roster::page::{PeoplePage, RosterRow};
use canvas_roster::roster::{
    class_names, last_selected, load_roster, other_classes, preserve_notes, previous_notes,
    remember_selected, roster_from_page, save_roster,
};
use canvas_roster::store::{FileStore, MemStore, StoreMap, StorePort, LAST_SELECTED_KEY};

fn page_with(course: Option<&str>, students: &[(&str, &str)]) -> PeoplePage {
    PeoplePage {
        course_name: course.map(|c| c.to_string()),
        rows: students
            .iter()
            .map(|(id, name)| RosterRow::stub(id, name))
            .collect(),
    }
}

fn cs101() -> PeoplePage {
    page_with(
        Some("CS 101"),
        &[
            ("42", "Lovelace, Ada (she/her)"),
            ("43", "Hopper, Grace"),
            ("44", "Curie, Marie"),
        ],
    )
}

#[test]
fn save_then_load_keeps_order_and_empty_notes() {
    let mut store = MemStore::new();
    let (class, count) = save_roster(&mut store, &cs101(), false).unwrap();
    assert_eq!(class, "CS 101");
    assert_eq!(count, 3);

    let roster = load_roster(&store, "CS 101").unwrap().unwrap();
    let ids: Vec<&str> = roster.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(ids, ["42", "43", "44"]);
    assert!(roster.iter().all(|r| r.notes.is_empty()));
    assert_eq!(roster[0].first_name, "Ada");
    assert_eq!(roster[0].last_name, "Lovelace");
}

#[test]
fn unresolved_or_sentinel_course_writes_nothing() {
    let mut store = MemStore::new();

    assert!(save_roster(&mut store, &page_with(None, &[("1", "A, B")]), false).is_err());
    assert!(
        save_roster(&mut store, &page_with(Some("All Courses"), &[("1", "A, B")]), false).is_err()
    );
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn note_edit_changes_exactly_one_field() {
    let mut store = MemStore::new();
    save_roster(&mut store, &cs101(), false).unwrap();
    let before = load_roster(&store, "CS 101").unwrap().unwrap();

    assert!(notes::save_note(&mut store, "CS 101", "42", "Great student").unwrap());

    let after = load_roster(&store, "CS 101").unwrap().unwrap();
    assert_eq!(after[0].notes, "Great student");
    assert_eq!(after[0].first_name, before[0].first_name);
    assert_eq!(after[0].last_name, before[0].last_name);
    assert_eq!(after[0].role, before[0].role);
    assert_eq!(&after[1..], &before[1..]);

    assert_eq!(
        notes::load_note(&store, "CS 101", "42").unwrap().as_deref(),
        Some("Great student")
    );
}

#[test]
fn note_save_on_unknown_target_is_a_clean_no() {
    let mut store = MemStore::new();
    assert!(!notes::save_note(&mut store, "CS 101", "42", "x").unwrap());

    save_roster(&mut store, &cs101(), false).unwrap();
    assert!(!notes::save_note(&mut store, "CS 101", "999", "x").unwrap());
    let roster = load_roster(&store, "CS 101").unwrap().unwrap();
    assert!(roster.iter().all(|r| r.notes.is_empty()));
}

#[test]
fn plain_resave_discards_notes_and_carry_restores_them() {
    let mut store = MemStore::new();
    save_roster(&mut store, &cs101(), false).unwrap();
    notes::save_note(&mut store, "CS 101", "42", "Great student").unwrap();

    // replace without the merge step: fresh parses, empty notes
    save_roster(&mut store, &cs101(), false).unwrap();
    let roster = load_roster(&store, "CS 101").unwrap().unwrap();
    assert_eq!(roster[0].notes, "");

    // with the merge step the note comes back from the stored roster
    notes::save_note(&mut store, "CS 101", "42", "Great student").unwrap();
    save_roster(&mut store, &cs101(), true).unwrap();
    let roster = load_roster(&store, "CS 101").unwrap().unwrap();
    assert_eq!(roster[0].notes, "Great student");
    assert_eq!(roster[1].notes, "");
}

#[test]
fn preserve_notes_fills_only_empty_slots_by_user_id() {
    let old = {
        let mut r = roster_from_page(&cs101());
        r[0].notes = "kept".to_string();
        r[2].notes = "also kept".to_string();
        r
    };
    let mut new = roster_from_page(&page_with(
        Some("CS 101"),
        &[("44", "Curie, Marie"), ("42", "Lovelace, Ada"), ("45", "New, Kid")],
    ));
    new[1].notes = "fresh edit".to_string();

    preserve_notes(&old, &mut new);
    assert_eq!(new[0].notes, "also kept"); // 44, matched by id not position
    assert_eq!(new[1].notes, "fresh edit"); // non-empty slot untouched
    assert_eq!(new[2].notes, ""); // 45 never seen before
}

#[test]
fn foreign_keys_survive_and_are_not_classes() {
    let mut store = MemStore::new();
    let mut entries = StoreMap::new();
    entries.insert("theme".into(), json!({ "dark": true }));
    store.set(entries).unwrap();

    save_roster(&mut store, &cs101(), false).unwrap();
    remember_selected(&mut store, "CS 101").unwrap();

    assert_eq!(class_names(&store).unwrap(), ["CS 101"]);
    assert_eq!(store.get("theme").unwrap(), Some(json!({ "dark": true })));
    assert_eq!(last_selected(&store).unwrap().as_deref(), Some("CS 101"));
}

#[test]
fn reserved_key_is_not_a_class_and_missing_class_is_empty() {
    let mut store = MemStore::new();
    remember_selected(&mut store, "CS 101").unwrap();

    assert!(class_names(&store).unwrap().is_empty());
    assert!(load_roster(&store, "CS 101").unwrap().is_none());

    let all = store.get_all().unwrap();
    assert!(all.contains_key(LAST_SELECTED_KEY));
}

#[test]
fn cross_class_queries_see_other_rosters_only() {
    let mut store = MemStore::new();
    save_roster(&mut store, &cs101(), false).unwrap();
    save_roster(
        &mut store,
        &page_with(Some("CS 201"), &[("42", "Lovelace, Ada"), ("50", "Turing, Alan")]),
        false,
    )
    .unwrap();
    notes::save_note(&mut store, "CS 101", "42", "Asks great questions").unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(other_classes(&all, "42", "CS 201"), ["CS 101"]);
    assert!(other_classes(&all, "50", "CS 201").is_empty());

    assert_eq!(
        previous_notes(&all, "42", "CS 201"),
        [("CS 101".to_string(), "Asks great questions".to_string())]
    );
    // empty notes in other classes don't count
    assert!(previous_notes(&all, "43", "CS 201").is_empty());
}

/* ---------------- file-backed store ---------------- */

fn tmp_store(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cr_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p.join("rosters.json")
}

#[test]
fn file_store_merges_and_persists_across_instances() {
    let path = tmp_store("merge");

    {
        let mut store = FileStore::at(path.clone());
        save_roster(&mut store, &cs101(), false).unwrap();
        remember_selected(&mut store, "CS 101").unwrap();
    }

    // fresh handle, same file: both keys survived the second set()
    let store = FileStore::at(path);
    assert_eq!(class_names(&store).unwrap(), ["CS 101"]);
    assert_eq!(last_selected(&store).unwrap().as_deref(), Some("CS 101"));
    let roster = load_roster(&store, "CS 101").unwrap().unwrap();
    assert_eq!(roster.len(), 3);
}

#[test]
fn file_store_round_trips_camel_case_layout() {
    let path = tmp_store("layout");
    let mut store = FileStore::at(path.clone());
    let mut page = page_with(Some("CS 101"), &[("42", "Lovelace, Ada (she/her)")]);
    page.rows[0].pfp_url = "https://cdn.example/42.png".to_string();
    save_roster(&mut store, &page, false).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"userId\""));
    assert!(text.contains("\"firstName\""));
    assert!(text.contains("\"pfpUrl\""));
    assert!(!text.contains("user_id"));
}
