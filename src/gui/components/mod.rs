// src/gui/components/mod.rs
pub mod export_bar;
pub mod link_grid;
pub mod link_table;
pub mod profile_panel;
