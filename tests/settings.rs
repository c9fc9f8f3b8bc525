// tests/settings.rs
use std::fs;

use fb_linkgen::config::{
    AppState, ExportFormat,
    settings::{load, load_or_default, save},
};

#[test]
fn saved_settings_load_back() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(".store").join("settings.toml");

    let mut state = AppState::default();
    state.options.resolve.timeout_secs = 7;
    state.options.export.format = ExportFormat::Tsv;
    state.options.export.set_out_dir("reports");
    state.gui.last_url = "facebook.com/alice".into();

    save(&path, &state).unwrap();
    assert_eq!(load(&path).unwrap(), state);
}

#[test]
fn partial_file_fills_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[options.resolve]\ntimeout_secs = 3\n").unwrap();

    let state = load(&path).unwrap();
    assert_eq!(state.options.resolve.timeout_secs, 3);
    assert_eq!(state.options.resolve.domain, "facebook.com");
    assert_eq!(state.options.export.format, ExportFormat::Xlsx);
}

#[test]
fn malformed_or_missing_file_uses_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.toml");
    assert_eq!(load_or_default(&path), AppState::default());

    fs::write(&path, "this is = = not toml").unwrap();
    assert!(load(&path).is_err());
    assert_eq!(load_or_default(&path), AppState::default());
}
