// src/gui/actions/notes.rs
use crate::gui::app::{App, EditorRequest, NoteEditor, NoteSurface};
use crate::notes;

pub fn open_modal(app: &mut App, class: &str, user_id: &str) {
    if let Some(editor) = open(app, class, user_id, NoteSurface::Modal) {
        app.modal = Some(editor);
    }
}

/// Relay target for `EditorRequest`; opens the detached window.
pub fn open_detached(app: &mut App, req: EditorRequest) {
    if let Some(editor) = open(app, &req.class, &req.user_id, NoteSurface::Detached) {
        app.detached = Some(editor);
    }
}

fn open(app: &mut App, class: &str, user_id: &str, surface: NoteSurface) -> Option<NoteEditor> {
    let draft = match notes::load_note(&app.store, class, user_id) {
        Ok(note) => note.unwrap_or_default(),
        Err(e) => {
            loge!("Note: Load failed {}:{}: {}", class, user_id, e);
            app.status(format!("Note load error: {e}"));
            return None;
        }
    };

    let who = app
        .roster
        .iter()
        .find(|r| r.user_id == user_id)
        .map(|r| r.display_name())
        .unwrap_or_else(|| s!(user_id));

    Some(NoteEditor {
        surface,
        class: s!(class),
        user_id: s!(user_id),
        title: format!("Editing Note for {}", who),
        draft,
        preview: false,
    })
}

pub fn save_editor(app: &mut App, editor: &NoteEditor) {
    match notes::save_note(&mut app.store, &editor.class, &editor.user_id, &editor.draft) {
        Ok(true) => {
            logf!("Note: Saved {}:{}", editor.class, editor.user_id);
            app.refresh_store_view();
            app.status("Note saved");
        }
        Ok(false) => {
            app.status("Student not in store — save the roster first");
        }
        Err(e) => {
            loge!("Note: Save failed {}:{}: {}", editor.class, editor.user_id, e);
            app.status(format!("Note save error: {e}"));
        }
    }
}
