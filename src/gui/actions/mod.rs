// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod extract; // src/gui/actions/extract.rs
mod open;    // src/gui/actions/open.rs

pub use copy::copy;
pub use export::export;
pub use extract::{extract, poll_extract};
pub use open::open;

pub(super) const NEED_PROFILE: &str = "Please extract user information first";
