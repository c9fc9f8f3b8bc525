// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::mpsc::Receiver,
};

use eframe::egui;

use crate::{
    config::{settings, state::AppState},
    error::ResolveError,
    links::{self, GeneratedLink, TEMPLATES},
    profile::ProfileReference,
};

use super::{actions, components};

pub type ExtractResult = Result<ProfileReference, ResolveError>;

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    settings_path: PathBuf,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Facebook Link Generator",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, settings_path)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    settings_path: PathBuf,

    // text fields; mapped into state on use
    pub url_text: String,
    pub out_dir_text: String,

    // last successful resolution and its links
    pub profile: Option<ProfileReference>,
    pub links: Vec<GeneratedLink>,

    pub status: String,

    // in-flight extraction (worker thread → UI)
    pub pending: Option<Receiver<ExtractResult>>,
}

impl App {
    pub fn new(state: AppState, settings_path: PathBuf) -> Self {
        let url_text = state.gui.last_url.clone();
        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        logf!("Init: out_dir={} format={:?}", out_dir_text, state.options.export.format);

        Self {
            state,
            settings_path,
            url_text,
            out_dir_text,
            profile: None,
            links: Vec::new(),
            status: s!("Idle"),
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn is_busy(&self) -> bool { self.pending.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// New profile → fresh links. Nothing else reads the old ones.
    pub fn set_profile(&mut self, profile: ProfileReference) {
        self.links = links::expand(profile.identifier(), TEMPLATES);
        self.state.gui.last_url = s!(profile.raw_input_url());
        self.profile = Some(profile);
    }

    /// Mirror the folder text field → export options.
    pub fn sync_out_dir(&mut self) {
        self.state.options.export.set_out_dir(&self.out_dir_text);
    }

    pub fn persist(&mut self) {
        self.sync_out_dir();
        if let Err(e) = settings::save(&self.settings_path, &self.state) {
            loge!("Settings: save failed: {}", e);
        }
    }

    fn remember_window(&mut self, ctx: &egui::Context) {
        let size = ctx.screen_rect().size();
        if size.x >= 1.0 && size.y >= 1.0 {
            self.state.gui.window_w = size.x.round() as u32;
            self.state.gui.window_h = size.y.round() as u32;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_extract(self);
        self.remember_window(ctx);
        if ctx.input(|i| i.viewport().close_requested()) {
            self.persist();
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_busy() {
                    ui.add(egui::Spinner::new().size(14.0));
                }
                ui.label(self.status.as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::profile_panel::draw(ui, self);

            ui.separator();

            components::link_grid::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::link_table::draw(ui, self);
        });
    }
}
