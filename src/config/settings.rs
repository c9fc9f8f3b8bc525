// src/config/settings.rs
//
// Persisted AppState as TOML under the local store dir.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::consts::{SETTINGS_FILE, STORE_DIR};
use super::state::AppState;

pub fn default_path() -> PathBuf {
    Path::new(STORE_DIR).join(SETTINGS_FILE)
}

pub fn load(path: &Path) -> Result<AppState, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Missing or malformed settings are not fatal.
pub fn load_or_default(path: &Path) -> AppState {
    if !path.exists() {
        logd!("Settings: {} not found, using defaults", path.display());
        return AppState::default();
    }
    match load(path) {
        Ok(state) => {
            logf!("Settings: loaded {}", path.display());
            state
        }
        Err(e) => {
            loge!("Settings: {} unreadable ({}), using defaults", path.display(), e);
            AppState::default()
        }
    }
}

pub fn save(path: &Path, state: &AppState) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, toml::to_string_pretty(state)?)?;
    logd!("Settings: saved {}", path.display());
    Ok(())
}
