// src/bin/cli.rs
use clap::Parser;
use fb_linkgen::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(cli::Args::parse())
}
