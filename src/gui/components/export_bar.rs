// src/gui/components/export_bar.rs
//
// Format choice, output folder, Export and Copy.

use eframe::egui::{self, Color32, RichText, TextEdit, TextStyle};
use crate::{config::options::ExportFormat, gui::{actions, app::App}};

const FB_BLUE: Color32 = Color32::from_rgb(0x18, 0x77, 0xf2);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let has_profile = app.profile.is_some();

    let before = app.state.options.export.format;
    ui.horizontal(|ui| {
        ui.label("Format:");
        for fmt in ExportFormat::ALL {
            ui.selectable_value(&mut app.state.options.export.format, fmt, fmt.label());
        }
    });
    if app.state.options.export.format != before {
        logf!("UI: Export format → {:?}", app.state.options.export.format);
        app.persist();
    }

    ui.horizontal(|ui| {
        ui.label("Folder:");
        if ui
            .add(TextEdit::singleline(&mut app.out_dir_text).font(TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_dir_text changed → {}", app.out_dir_text);
        }
    });

    ui.horizontal(|ui| {
        let label = RichText::new("Export All Links").color(Color32::WHITE).strong();
        let export = ui.add_enabled(has_profile, egui::Button::new(label).fill(FB_BLUE));
        if export.clicked() {
            actions::export(app);
        }

        if ui.add_enabled(has_profile, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
    });
}
