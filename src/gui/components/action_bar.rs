// src/gui/components/action_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Fetch row ---
    ui.horizontal(|ui| {
        ui.label("Course id:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.course_text)
                .desired_width(90.0)
                .font(egui::TextStyle::Monospace),
        );

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(egui::Button::new(egui::RichText::new("FETCH").color(black).strong()).fill(red))
            .clicked()
        {
            actions::scrape::fetch(app);
        }

        let before = app.state.gui.show_notes;
        ui.checkbox(&mut app.state.gui.show_notes, "Show notes on rows");
        if app.state.gui.show_notes != before {
            logf!("UI: show_notes → {}", app.state.gui.show_notes);
        }
    });

    // --- Export row ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.label("Format:");
        ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
        ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let export = &mut app.state.options.export;
        ui.checkbox(&mut export.include_headers, "Headers");
        ui.checkbox(&mut export.include_notes, "Include notes");

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        if ui.button("Copy").clicked() {
            if let Some(txt) = actions::export::copy_text(app) {
                ui.ctx().copy_text(txt);
                app.status("Copied to clipboard");
            }
        }

        if ui.button("Export").clicked() {
            actions::export::export(app);
        }
    });

    let status = app.status.lock().unwrap().clone();
    ui.label(format!("Status: {status}"));
}
