// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use fb_linkgen::{config::settings, gui, log};

fn main() {
    log::init();

    let settings_path = settings::default_path();
    let state = settings::load_or_default(&settings_path);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Facebook Link Generator")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, settings_path) {
        fb_linkgen::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
