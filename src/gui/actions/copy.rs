// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.links.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there are no links yet");
        return;
    }

    ui_ctx.copy_text(csv::links_to_clipboard_text(&app.links));
    logf!("Copy: {} links", app.links.len());
    app.status("Copied to clipboard");
}
