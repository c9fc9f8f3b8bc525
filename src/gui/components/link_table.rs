// src/gui/components/link_table.rs
//
// Read-only preview of the generated URLs.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.links.is_empty() {
        ui.weak("No links yet. Extract a profile to generate them.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder().clip(true))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Link Type"); });
            header.col(|ui| { ui.strong("URL"); });
        })
        .body(|mut body| {
            for link in &app.links {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(link.label.as_str()); });
                    row.col(|ui| { ui.label(RichText::new(link.url.as_str()).monospace()); });
                });
            }
        });
}
