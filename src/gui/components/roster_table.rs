// src/gui/components/roster_table.rs
//
// The cross-class browser view. Pure read-side: everything shown comes
// from the whole-store snapshot; edits are routed through the note
// actions. Note text is rendered at display time only.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    annotate,
    core::markdown,
    gui::app::{App, EditorRequest},
    roster,
    student::StudentRecord,
};

struct RowView {
    user_id: String,
    name: String,
    pronouns: String,
    role: String,
    also_in: String,
    note_cell: String,
    tooltip: String,
    link: String,
}

enum RowAction {
    EditModal(String),
    EditDetached(String),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(class) = app.selected_class().map(|s| s.to_string()) else {
        ui.label("Select a class on the left, or fetch one above.");
        return;
    };
    if app.roster.is_empty() {
        // a class with nothing saved renders as an empty list
        ui.label(format!("{class}: no students saved."));
        return;
    }

    let show_notes = app.state.gui.show_notes;
    let rows: Vec<RowView> = app
        .roster
        .iter()
        .map(|rec| row_view(app, rec, &class, show_notes))
        .collect();

    let mut pending: Vec<RowAction> = Vec::new();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(180.0).resizable(true).clip(true)) // Name
        .column(Column::initial(80.0).clip(true))                  // Pronouns
        .column(Column::initial(110.0).clip(true))                 // Role
        .column(Column::initial(140.0).resizable(true).clip(true)) // Also in
        .column(Column::remainder().clip(true))                    // Notes
        .column(Column::auto())                                    // Search link
        .column(Column::auto())                                    // Edit
        .header(24.0, |mut header| {
            for title in ["Name", "Pronouns", "Role", "Also in", "Notes", "", ""] {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(title).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(22.0, rows.len(), |mut row| {
                let rv = &rows[row.index()];

                row.col(|ui| {
                    let resp = ui
                        .with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(&rv.name)
                        })
                        .inner;
                    // tooltip preview surface
                    resp.on_hover_ui(|ui| {
                        ui.label(&rv.tooltip);
                    });
                });
                row.col(|ui| { ui.label(&rv.pronouns); });
                row.col(|ui| { ui.label(&rv.role); });
                row.col(|ui| { ui.label(&rv.also_in); });
                row.col(|ui| { ui.label(&rv.note_cell); });
                row.col(|ui| { ui.hyperlink_to("LinkedIn", &rv.link); });
                row.col(|ui| {
                    ui.horizontal(|ui| {
                        if ui.small_button("Edit").clicked() {
                            pending.push(RowAction::EditModal(rv.user_id.clone()));
                        }
                        if ui.small_button("Editor").clicked() {
                            pending.push(RowAction::EditDetached(rv.user_id.clone()));
                        }
                    });
                });
            });
        });

    for act in pending {
        match act {
            RowAction::EditModal(uid) => {
                crate::gui::actions::notes::open_modal(app, &class, &uid);
            }
            RowAction::EditDetached(uid) => {
                // fire-and-forget; the app drains the relay next frame
                let _ = app.editor_tx.send(EditorRequest {
                    class: class.clone(),
                    user_id: uid,
                });
            }
        }
    }
}

fn row_view(app: &App, rec: &StudentRecord, class: &str, show_notes: bool) -> RowView {
    let also = roster::other_classes(&app.all_data, &rec.user_id, class);
    let prev = roster::previous_notes(&app.all_data, &rec.user_id, class);

    let mut tip = if rec.notes.is_empty() {
        s!("No notes for this class.")
    } else {
        markdown::render_text(&rec.notes)
    };
    if !also.is_empty() {
        tip.push_str("\n\n— Also In —\n");
        tip.push_str(&also.join(", "));
    }
    if !prev.is_empty() {
        tip.push_str("\n\n— Previous Notes —");
        for (cls, note) in &prev {
            tip.push_str(&format!("\n{}: {}", cls, markdown::render_text(note)));
        }
    }

    let note_cell = if show_notes {
        markdown::render_text(&rec.notes)
    } else if !rec.notes.is_empty() {
        s!("…") // note exists; hover the name for the preview
    } else {
        s!()
    };

    let cleaned = if rec.last_name.is_empty() {
        rec.first_name.clone()
    } else {
        format!("{}, {}", rec.last_name, rec.first_name)
    };

    // prefer the control the engine injected into the live page, when the
    // watched page is this class; otherwise derive the same URL here
    let link = app
        .page
        .as_ref()
        .filter(|p| p.course_name.as_deref() == Some(class))
        .and_then(|p| p.rows.iter().find(|r| r.user_id == rec.user_id))
        .and_then(|r| r.cells.iter().flat_map(|c| c.links.iter()).next())
        .map(|l| l.href.clone())
        .unwrap_or_else(|| annotate::search_url(&annotate::search_query(&cleaned)));

    RowView {
        user_id: rec.user_id.clone(),
        name: rec.display_name(),
        pronouns: rec.pronouns.clone(),
        role: rec.role.clone(),
        also_in: also.join(", "),
        note_cell,
        tooltip: tip,
        link,
    }
}
