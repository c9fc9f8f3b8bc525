// src/gui/actions/open.rs
use crate::{browser, gui::app::App};

pub fn open(app: &mut App, label: &str) {
    if app.profile.is_none() {
        app.status(super::NEED_PROFILE);
        return;
    }
    let Some(url) = app.links.iter().find(|l| l.label == label).map(|l| l.url.clone()) else {
        loge!("Open: No generated link for {:?}", label);
        return;
    };

    match browser::open_url(&url) {
        Ok(()) => app.status(format!("Opened {label}")),
        Err(e) => {
            loge!("Open: {}", e);
            app.status(e);
        }
    }
}
