// tests/export_roster.rs
use std::fs;
use std::path::PathBuf;

use canvas_roster::config::options::{AppOptions, ExportFormat};
use canvas_roster::csv::to_export_string;
use canvas_roster::file::write_export_single;
use canvas_roster::student::StudentRecord;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cr_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            user_id: "42".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            pronouns: "she/her".into(),
            role: "Student".into(),
            notes: "**Great** student".into(),
            ..StudentRecord::default()
        },
        StudentRecord {
            user_id: "43".into(),
            first_name: "Grace".into(),
            last_name: "Hopper, Adm.".into(), // forces quoting
            role: "Student".into(),
            ..StudentRecord::default()
        },
    ]
}

#[test]
fn notes_column_only_when_toggled_and_kept_as_source() {
    let roster = sample();

    let without = to_export_string(&roster, true, false, ',');
    assert!(without.starts_with("Last,First,Pronouns,Role,User Id\n"));
    assert!(!without.contains("Notes"));
    assert!(!without.contains("Great"));

    let with = to_export_string(&roster, true, true, ',');
    assert!(with.starts_with("Last,First,Pronouns,Role,User Id,Notes\n"));
    // Markdown source goes out untouched, never markup
    assert!(with.contains("**Great** student"));
    assert!(!with.contains("<strong>"));
}

#[test]
fn fields_with_separator_are_quoted() {
    let roster = sample();
    let out = to_export_string(&roster, false, false, ',');
    assert!(out.contains("\"Hopper, Adm.\",Grace"));

    // TSV needs no quoting for commas
    let tsv = to_export_string(&roster, false, false, '\t');
    assert!(tsv.contains("Hopper, Adm.\tGrace"));
}

#[test]
fn export_writes_file_with_format_extension() {
    let dir = tmp_dir("single");
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_notes = true;
    opts.export.set_path(dir.join("cs101").to_str().unwrap());

    let path = write_export_single(&opts.export, &sample()).unwrap();
    assert!(path.to_string_lossy().ends_with("cs101.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Last\tFirst"));
    assert!(text.contains("**Great** student"));
}
