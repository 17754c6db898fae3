// tests/people_spec.rs
//
// Offline fixture for the people-page spec: one well-formed student row,
// one non-student row, one malformed student row, one row without an id.

use canvas_roster::annotate::Annotator;
use canvas_roster::specs::people;
use canvas_roster::student::{parse_student, split_name, UNKNOWN_NAME};

const FIXTURE: &str = r#"
<html><body>
<nav id="breadcrumbs"><ul>
  <li><a href="/"><span>Home</span></a></li>
  <li><a href="/courses/101"><span>CS&nbsp;101</span></a></li>
  <li><span>People</span></li>
</ul></nav>
<div id="content">
<table class="roster">
  <tr class="rosterRow al-hover-container StudentEnrollment" id="user_42">
    <td><img src="https://cdn.example/42.png" alt="">
        <a class="roster_user_name student_context_card_trigger" href="/users/42">
          Lovelace, Ada (she/her)
        </a></td>
    <td>Section 1</td>
    <td><div>Student</div></td>
    <td class="right e-actions"></td>
  </tr>
  <tr class="rosterRow al-hover-container TeacherEnrollment" id="user_7">
    <td><a class="roster_user_name student_context_card_trigger" href="/users/7">Teacher, A</a></td>
  </tr>
  <tr class="rosterRow al-hover-container StudentEnrollment" id="user_43">
    <td>no name element here</td>
    <td>Section 1</td>
    <td><div>Student</div></td>
  </tr>
  <tr class="rosterRow al-hover-container StudentEnrollment">
    <td>row without a user id</td>
  </tr>
</table>
</div>
</body></html>
"#;

#[test]
fn parses_course_name_from_breadcrumb() {
    let page = people::parse_document(FIXTURE);
    assert_eq!(page.course_name.as_deref(), Some("CS 101"));
}

#[test]
fn row_predicate_keeps_students_only() {
    let page = people::parse_document(FIXTURE);
    let ids: Vec<&str> = page.rows.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(ids, ["42", "43"]);
}

#[test]
fn well_formed_row_extracts_every_field() {
    let page = people::parse_document(FIXTURE);
    let row = &page.rows[0];

    assert_eq!(row.raw_name.as_deref(), Some("Lovelace, Ada (she/her)"));
    assert_eq!(row.role, "Student");
    assert_eq!(row.pfp_url, "https://cdn.example/42.png");
    assert_eq!(row.cells.len(), 4);
    assert!(row.cells[3].right_aligned);
    assert!(!row.cells[0].right_aligned);
}

#[test]
fn malformed_row_is_kept_with_defaults() {
    let page = people::parse_document(FIXTURE);
    let row = &page.rows[1];

    assert_eq!(row.user_id, "43");
    assert_eq!(row.raw_name, None);
    assert_eq!(row.pfp_url, "");
}

#[test]
fn annotation_over_fixture_targets_right_cell_and_skips_bad_row() {
    let mut page = people::parse_document(FIXTURE);
    let stats = Annotator::new().scan(&mut page);

    assert_eq!(stats.injected, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(page.rows[0].cells[3].links.len(), 1);
    assert_eq!(page.rows[1].link_count(), 0);
}

#[test]
fn missing_breadcrumb_means_no_course() {
    let page = people::parse_document("<table></table>");
    assert_eq!(page.course_name, None);
    assert!(page.rows.is_empty());
}

/* ---------------- row parser ---------------- */

#[test]
fn split_name_handles_pronouns_and_commas() {
    let p = split_name("Lovelace, Ada (she/her)");
    assert_eq!(p.last, "Lovelace");
    assert_eq!(p.first, "Ada");
    assert_eq!(p.pronouns, "she/her");

    // only the first comma splits
    let p = split_name("Lovelace, Ada, Jr.");
    assert_eq!(p.last, "Lovelace");
    assert_eq!(p.first, "Ada, Jr.");

    // every parenthetical goes, pronouns keep the first group verbatim
    let p = split_name("Curie, Marie (she/her) (aud)");
    assert_eq!(p.first, "Marie");
    assert_eq!(p.pronouns, "she/her");
}

#[test]
fn split_name_without_comma_is_single_token() {
    let p = split_name("Cher (she/her)");
    assert_eq!(p.first, "Cher");
    assert_eq!(p.last, "");
    assert_eq!(p.pronouns, "she/her");
}

#[test]
fn empty_name_falls_back_to_sentinel() {
    let p = split_name("  (they/them) ");
    assert_eq!(p.last, "Unknown");
    assert_eq!(p.first, "Name");
    assert_eq!(UNKNOWN_NAME, "Unknown, Name");
}

#[test]
fn parse_student_is_deterministic_and_never_aborts() {
    let page = people::parse_document(FIXTURE);

    let a = parse_student(&page.rows[0]);
    let b = parse_student(&page.rows[0]);
    assert_eq!(a, b);
    assert_eq!(a.first_name, "Ada");
    assert_eq!(a.last_name, "Lovelace");
    assert_eq!(a.pronouns, "she/her");
    assert_eq!(a.role, "Student");
    assert_eq!(a.notes, "");

    // malformed row still yields a record, sentinel name, empty fields
    let c = parse_student(&page.rows[1]);
    assert_eq!(c.user_id, "43");
    assert_eq!(c.last_name, "Unknown");
    assert_eq!(c.first_name, "Name");
    assert_eq!(c.pfp_url, "");
}
