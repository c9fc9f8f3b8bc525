// src/gui/actions/extract.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{config::consts::PLATFORM_NAME, gui::app::App, resolver};

/// Kick off a resolution on a worker thread. The UI keeps painting; the
/// result is picked up by `poll_extract`.
pub fn extract(app: &mut App, ctx: &egui::Context) {
    if app.is_busy() {
        logd!("Extract: Clicked while a request is in flight");
        return;
    }

    let input = s!(app.url_text.trim());
    if input.is_empty() {
        app.status(format!("Please enter a {PLATFORM_NAME} profile URL"));
        return;
    }

    let opts = app.state.options.resolve.clone();
    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();

    logf!("Extract: Begin url={:?} timeout={}s", input, opts.timeout_secs);

    thread::spawn(move || {
        let result = resolver::resolve(&input, &opts);
        let _ = tx.send(result);
        ctx.request_repaint();
    });

    app.pending = Some(rx);
    app.status("Extracting…");
}

pub fn poll_extract(app: &mut App) {
    let received = match app.pending.as_ref().map(|rx| rx.try_recv()) {
        None | Some(Err(TryRecvError::Empty)) => return,
        Some(r) => r,
    };
    app.pending = None;

    match received {
        Ok(Ok(profile)) => {
            app.status(format!(
                "Found {} (id {})",
                if profile.username().is_empty() { "profile" } else { profile.username() },
                profile.identifier()
            ));
            app.set_profile(profile);
            app.persist();
        }
        Ok(Err(e)) => {
            loge!("Extract: Error: {}", e);
            app.status(e.user_message());
        }
        Err(_) => {
            loge!("Extract: Worker hung up without a result");
            app.status("Error processing URL: request was interrupted");
        }
    }
}
