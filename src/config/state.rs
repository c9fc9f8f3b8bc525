// src/config/state.rs
use serde::{Deserialize, Serialize};

use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Last URL typed into the profile field.
    pub last_url: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            last_url: s!(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
