// src/gui/actions/export.rs
use crate::{csv, file, gui::app::App};

/// Export string for the clipboard, or None with a status message.
pub fn copy_text(app: &mut App) -> Option<String> {
    if app.roster.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return None;
    }
    let export = &app.state.options.export;
    logf!("Copy: class={:?} rows={}", app.selected_class(), app.roster.len());
    Some(csv::to_export_string(
        &app.roster,
        export.include_headers,
        export.include_notes,
        export.delim(),
    ))
}

pub fn export(app: &mut App) {
    if app.roster.is_empty() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
    }

    logf!(
        "Export: Begin class={:?} rows={}",
        app.selected_class(),
        app.roster.len()
    );

    match file::write_export_single(&app.state.options.export, &app.roster) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
