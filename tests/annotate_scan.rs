// tests/annotate_scan.rs
use std::time::{Duration, Instant};

use canvas_roster::annotate::{search_query, search_url, Annotator, Debouncer, PageWatcher};
use canvas_roster::page::{Cell, PeoplePage, RosterRow};

fn page_of(rows: Vec<RosterRow>) -> PeoplePage {
    PeoplePage { course_name: Some("CS 101".into()), rows }
}

#[test]
fn scan_is_idempotent() {
    let mut page = page_of(vec![
        RosterRow::stub("42", "Lovelace, Ada (she/her)"),
        RosterRow::stub("43", "Hopper, Grace"),
    ]);
    let mut eng = Annotator::new();

    let first = eng.scan(&mut page);
    assert_eq!(first.injected, 2);
    assert_eq!(page.link_count(), 2);

    // same subtree, no mutation: zero additional insertions
    let second = eng.scan(&mut page);
    assert_eq!(second.injected, 0);
    assert_eq!(second.already_marked, 2);
    assert_eq!(page.link_count(), 2);
}

#[test]
fn query_strips_parenthetical_and_splits_at_first_comma() {
    assert_eq!(
        search_query("Lovelace, Ada"),
        r#""Ada" "Lovelace" ucla site:linkedin.com"#
    );

    let mut page = page_of(vec![RosterRow::stub("42", "Lovelace, Ada (she/her)")]);
    let mut eng = Annotator::new();
    eng.scan(&mut page);

    let link = &page.rows[0].cells[0].links[0];
    assert_eq!(
        link.href,
        search_url(r#""Ada" "Lovelace" ucla site:linkedin.com"#)
    );
    // parenthetical removed from the query, kept verbatim in the aria label
    assert!(!link.href.contains("she"));
    assert_eq!(link.aria_label, "Search for Lovelace, Ada (she/her) on LinkedIn");
}

#[test]
fn comma_less_name_is_a_single_token() {
    assert_eq!(search_query("Cher"), r#""Cher" ucla site:linkedin.com"#);

    let mut page = page_of(vec![RosterRow::stub("9", "Cher")]);
    let stats = Annotator::new().scan(&mut page);
    assert_eq!(stats.injected, 1);
}

#[test]
fn control_lands_in_right_aligned_cell_then_last_cell() {
    let mut row = RosterRow::stub("42", "Lovelace, Ada");
    row.cells = vec![
        Cell::default(),
        Cell { right_aligned: true, links: Vec::new() },
        Cell::default(),
    ];
    let mut page = page_of(vec![row]);
    Annotator::new().scan(&mut page);
    assert_eq!(page.rows[0].cells[1].links.len(), 1);
    assert_eq!(page.rows[0].cells[0].links.len(), 0);
    assert_eq!(page.rows[0].cells[2].links.len(), 0);

    // no right-aligned cell: last cell wins
    let mut row = RosterRow::stub("43", "Hopper, Grace");
    row.cells = vec![Cell::default(), Cell::default()];
    let mut page = page_of(vec![row]);
    Annotator::new().scan(&mut page);
    assert_eq!(page.rows[0].cells[1].links.len(), 1);
}

#[test]
fn zero_cells_is_a_noop() {
    let mut row = RosterRow::stub("42", "Lovelace, Ada");
    row.cells.clear();
    let mut page = page_of(vec![row]);

    let mut eng = Annotator::new();
    let stats = eng.scan(&mut page);
    assert_eq!(stats.injected, 0);
    assert_eq!(stats.skipped, 1);
    assert_eq!(page.link_count(), 0);
}

#[test]
fn unusable_names_skip_without_marking_and_can_retry() {
    let mut page = page_of(vec![
        RosterRow { raw_name: None, ..RosterRow::stub("40", "") },
        RosterRow::stub("41", "(they/them)"), // cleans to empty
    ]);

    let mut eng = Annotator::new();
    let stats = eng.scan(&mut page);
    assert_eq!(stats.injected, 0);
    assert_eq!(stats.skipped, 2);
    assert!(!eng.is_marked("40"));
    assert!(!eng.is_marked("41"));

    // the page fills in real content later; the same engine picks it up
    page.rows[0].raw_name = Some("Curie, Marie".into());
    page.rows[1].raw_name = Some("Noether, Emmy (she/her)".into());
    let stats = eng.scan(&mut page);
    assert_eq!(stats.injected, 2);
}

#[test]
fn debounce_resets_instead_of_stacking() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(Duration::from_millis(100));

    d.signal(t0);
    d.signal(t0 + Duration::from_millis(50));
    d.signal(t0 + Duration::from_millis(90));

    // earlier deadlines were superseded, not queued
    assert!(!d.fire(t0 + Duration::from_millis(120)));
    assert!(d.fire(t0 + Duration::from_millis(190)));
    // one fire per armed window
    assert!(!d.fire(t0 + Duration::from_millis(500)));
}

#[test]
fn watcher_rescans_whole_page_after_quiet_period() {
    let t0 = Instant::now();
    let mut w = PageWatcher::with_delay(Duration::from_millis(100));
    let mut page = page_of(vec![RosterRow::stub("1", "One, Row")]);

    assert_eq!(w.scan_now(&mut page).injected, 1);

    // host page appends rows asynchronously
    page.append_rows(vec![RosterRow::stub("2", "Two, Row")]);
    w.children_added(t0);
    assert!(w.tick(&mut page, t0 + Duration::from_millis(10)).is_none());

    let stats = w
        .tick(&mut page, t0 + Duration::from_millis(110))
        .expect("debounce window closed");
    assert_eq!(stats.injected, 1);
    assert_eq!(stats.already_marked, 1);
    assert_eq!(page.link_count(), 2);

    // nothing pending afterwards
    assert!(w.tick(&mut page, t0 + Duration::from_millis(500)).is_none());
}
