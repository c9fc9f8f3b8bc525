// src/error.rs
use std::io;

use thiserror::Error;

use crate::config::consts::PLATFORM_NAME;

/// Why a profile URL could not be turned into an identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("user not found or given URL is not correct")]
    NotFound,
    #[error("network error: {0}")]
    Network(String),
}

impl ResolveError {
    /// One-line message for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            ResolveError::InvalidUrl(_) => format!("Please enter a valid {PLATFORM_NAME} URL"),
            ResolveError::NotFound => s!("User not found or given URL is not correct"),
            ResolveError::Network(msg) => format!("Error processing URL: {msg}"),
        }
    }
}

impl From<reqwest::Error> for ResolveError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ResolveError::Network(format!("no response in time ({e})"))
        } else {
            ResolveError::Network(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("settings write error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
