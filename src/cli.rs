// src/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    browser,
    config::{options::{AppOptions, ExportFormat}, settings},
    file,
    links::{self, LinkTemplate, TEMPLATES},
    resolver,
};

#[derive(Parser, Debug)]
#[command(
    name = "fb_linkgen-cli",
    version,
    about = "Resolve a Facebook profile URL to its numeric id and print the related links"
)]
pub struct Args {
    /// Profile URL, with or without the https:// prefix
    pub url: String,

    /// Write the links to a file (see --format, --out)
    #[arg(long)]
    pub export: bool,

    /// Export format: xlsx, csv or tsv
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Output folder for --export
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<String>,

    /// Open one link in the browser by label (repeatable), e.g. --open Groups
    #[arg(long = "open", value_name = "LABEL")]
    pub open: Vec<String>,

    /// Open all ten links
    #[arg(long, conflicts_with = "open")]
    pub open_all: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Ignore saved settings in .store/settings.toml
    #[arg(long)]
    pub no_settings: bool,

    /// Log to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

/// Flags win over saved settings.
pub fn apply_overrides(args: &Args, opts: &mut AppOptions) {
    if let Some(secs) = args.timeout {
        opts.resolve.timeout_secs = secs;
    }
    if let Some(fmt) = args.format {
        opts.export.format = fmt;
    }
    if let Some(dir) = &args.out {
        opts.export.set_out_dir(dir);
    }
}

/// Templates picked by `--open`, in the order given. Unknown labels are an error.
pub fn selected_templates(args: &Args) -> Result<Vec<&'static LinkTemplate>> {
    if args.open_all {
        return Ok(TEMPLATES.iter().collect());
    }
    args.open
        .iter()
        .map(|label| {
            links::find_template(label).ok_or_else(|| {
                let known: Vec<&str> = TEMPLATES.iter().map(|t| t.label).collect();
                eyre!("Unknown link label: {label} (expected one of: {})", known.join(", "))
            })
        })
        .collect()
}

pub fn run(args: Args) -> Result<()> {
    if args.verbose {
        crate::log::init_stderr();
    }

    let mut opts = if args.no_settings {
        AppOptions::default()
    } else {
        settings::load_or_default(&settings::default_path()).options
    };
    apply_overrides(&args, &mut opts);

    // Check labels before touching the network.
    let to_open = selected_templates(&args)?;

    let profile = resolver::resolve(&args.url, &opts.resolve)
        .wrap_err_with(|| format!("Error processing URL: {}", args.url.trim()))?;

    println!("Username: {}", profile.username());
    println!("User ID:  {}", profile.identifier());
    println!();

    let generated = links::expand(profile.identifier(), TEMPLATES);
    for link in &generated {
        println!("{}\t{}", link.label, link.url);
    }

    if args.export {
        let path = file::export_links(&opts.export, &profile, &generated)
            .wrap_err("Error exporting links")?;
        println!();
        println!("Links exported to {}", path.display());
    }

    for t in to_open {
        browser::open_url(&t.fill(profile.identifier())).map_err(|e| eyre!(e))?;
    }

    Ok(())
}
