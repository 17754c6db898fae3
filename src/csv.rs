// src/csv.rs
use std::io::{self, Write};

use crate::student::{Roster, StudentRecord};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Roster shaping ---------------- */

pub fn roster_headers(include_notes: bool) -> Vec<String> {
    let mut h = vec![s!("Last"), s!("First"), s!("Pronouns"), s!("Role"), s!("User Id")];
    if include_notes {
        h.push(s!("Notes"));
    }
    h
}

/// One export row. Notes go out verbatim as Markdown source.
pub fn roster_row(rec: &StudentRecord, include_notes: bool) -> Vec<String> {
    let mut row = vec![
        rec.last_name.clone(),
        rec.first_name.clone(),
        rec.pronouns.clone(),
        rec.role.clone(),
        rec.user_id.clone(),
    ];
    if include_notes {
        row.push(rec.notes.clone());
    }
    row
}

/// Create a full export string from one roster and the export toggles.
pub fn to_export_string(
    roster: &Roster,
    include_headers: bool,
    include_notes: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &roster_headers(include_notes), sep);
    }
    for rec in roster {
        let _ = write_row(&mut buf, &roster_row(rec, include_notes), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
