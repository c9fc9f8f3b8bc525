// src/gui/components/link_grid.rs
//
// Ten link buttons, three per row. Disabled until a profile is resolved.

use eframe::egui;
use crate::{config::consts::PLATFORM_NAME, gui::{actions, app::App}, links::TEMPLATES};

const COLUMNS: usize = 3;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(format!("{PLATFORM_NAME} Links"));

    let enabled = app.profile.is_some();
    let mut clicked: Option<&'static str> = None;

    egui::Grid::new("link_grid")
        .num_columns(COLUMNS)
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            for (i, t) in TEMPLATES.iter().enumerate() {
                let button = egui::Button::new(t.label).min_size(egui::vec2(160.0, 28.0));
                let resp = ui.add_enabled(enabled, button);
                let resp = match app.links.get(i) {
                    Some(link) => resp.on_hover_text(link.url.as_str()),
                    None => resp,
                };
                if resp.clicked() {
                    clicked = Some(t.label);
                }
                if (i + 1) % COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    // Act after the grid borrow ends
    if let Some(label) = clicked {
        actions::open(app, label);
    }
}
