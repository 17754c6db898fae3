// src/gui/components/class_panel.rs
//
// Renders the left class list and applies selection changes directly to
// `app`. Selection is remembered in the store's reserved key.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Classes");

    if ui.button("Reload").clicked() {
        app.refresh_store_view();
        app.status("Reloaded local data");
        logf!("UI: Store view reloaded ({} classes)", app.classes.len());
    }

    ui.separator();

    if app.classes.is_empty() {
        ui.label("No saved rosters yet.");
        return;
    }

    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("class_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for name in &app.classes {
                let is_selected = app.selected_class() == Some(name.as_str());
                if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                    clicked = Some(name.clone());
                }
            }
        });

    if let Some(name) = clicked {
        app.select_class(&name);
    }
}
