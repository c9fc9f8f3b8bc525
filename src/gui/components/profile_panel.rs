// src/gui/components/profile_panel.rs
//
// URL entry, Extract button and the read-only Username / User ID fields.

use eframe::egui::{self, Key, TextEdit};
use crate::{config::consts::PLATFORM_NAME, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Profile Information");

    ui.label(format!("Enter {PLATFORM_NAME} Profile URL:"));
    let field = ui.add(
        TextEdit::singleline(&mut app.url_text)
            .hint_text("https://www.facebook.com/username")
            .desired_width(f32::INFINITY),
    );
    let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

    let busy = app.is_busy();
    let clicked = ui
        .add_enabled(!busy, egui::Button::new("Extract Information"))
        .clicked();
    if clicked || (submitted && !busy) {
        actions::extract(app, ui.ctx());
    }

    // &str buffers: selectable, not editable
    let mut username: &str = app.profile.as_ref().map(|p| p.username()).unwrap_or("");
    let mut user_id: &str = app.profile.as_ref().map(|p| p.identifier()).unwrap_or("");

    egui::Grid::new("profile_info")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Username:");
            ui.add(TextEdit::singleline(&mut username).desired_width(260.0));
            ui.end_row();

            ui.label("User ID:");
            ui.add(TextEdit::singleline(&mut user_id).desired_width(260.0));
            ui.end_row();
        });
}
