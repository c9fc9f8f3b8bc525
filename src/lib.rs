// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod links;
pub mod profile;
pub mod resolver;

pub mod browser;
pub mod csv;
pub mod file;
pub mod xlsx;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{ExportError, ResolveError};
pub use links::{GeneratedLink, LinkTemplate, TEMPLATES, expand};
pub use profile::ProfileReference;
pub use resolver::{Fetch, Resolver, resolve};
