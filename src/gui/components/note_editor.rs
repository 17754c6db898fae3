// src/gui/components/note_editor.rs
//
// Draws both editing surfaces over the same data contract: the centered
// modal and the detached editor window. Both can be open at once; the
// store takes whichever saves last.

use eframe::egui::{self, Align2, RichText, TextEdit};

use crate::core::markdown;
use crate::gui::{
    actions,
    app::{App, NoteEditor, NoteSurface},
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if let Some(editor) = app.modal.take() {
        if let Some(editor) = draw_one(ctx, app, editor) {
            app.modal = Some(editor);
        }
    }
    if let Some(editor) = app.detached.take() {
        if let Some(editor) = draw_one(ctx, app, editor) {
            app.detached = Some(editor);
        }
    }
}

/// Returns the editor unless this frame finished it (save or cancel).
fn draw_one(ctx: &egui::Context, app: &mut App, mut editor: NoteEditor) -> Option<NoteEditor> {
    let mut keep = true;
    let mut save = false;

    let mut win = egui::Window::new(editor.title.clone())
        .id(egui::Id::new(match editor.surface {
            NoteSurface::Modal => "note_modal",
            NoteSurface::Detached => "note_window",
        }))
        .collapsible(false)
        .resizable(true);
    win = match editor.surface {
        NoteSurface::Modal => win
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .default_size([420.0, 300.0]),
        NoteSurface::Detached => win.default_size([460.0, 340.0]),
    };

    win.show(ctx, |ui| {
        ui.checkbox(&mut editor.preview, "Markup preview");

        if editor.preview {
            egui::ScrollArea::vertical()
                .id_salt("note_preview_scroll")
                .max_height(260.0)
                .show(ui, |ui| {
                    ui.add(egui::Label::new(
                        RichText::new(markdown::render(&editor.draft)).monospace(),
                    ));
                });
        } else {
            ui.add(
                TextEdit::multiline(&mut editor.draft)
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );
        }

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                save = true;
                keep = false;
            }
            if ui.button("Cancel").clicked() {
                keep = false; // no write
            }
        });
    });

    if save {
        actions::notes::save_editor(app, &editor);
    }
    if keep { Some(editor) } else { None }
}
