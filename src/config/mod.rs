// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod settings;
pub mod state;

pub use options::{AppOptions, ExportFormat, ExportOptions, ResolveOptions};
pub use state::{AppState, GuiState};
