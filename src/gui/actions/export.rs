// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize the folder text first (mutates app) before borrowing the profile
    app.sync_out_dir();

    if app.profile.is_none() {
        logd!("Export: Clicked, but there's no resolved profile");
        app.status(super::NEED_PROFILE);
        return;
    }

    let export = &app.state.options.export;
    logf!("Export: Begin format={:?} dir={}", export.format, export.out_dir().display());

    let result = match app.profile.as_ref() {
        Some(profile) => file::export_links(export, profile, &app.links),
        None => return,
    };

    match result {
        Ok(path) => {
            app.status(format!("Links exported to {}", path.display()));
            app.persist();
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Error exporting links: {e}"));
        }
    }
}
