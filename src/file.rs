// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use chrono::Local;
use rand::{Rng, distributions::Alphanumeric};

use crate::{
    config::{
        consts::{EXPORT_DATE_FORMAT, EXPORT_PREFIX, EXPORT_SUFFIX_LEN},
        options::{ExportFormat, ExportOptions},
    },
    core::sanitize::sanitize_filename_part,
    csv,
    error::ExportError,
    links::GeneratedLink,
    profile::ProfileReference,
    xlsx,
};

// Fresh suffixes before giving up on a free file name.
const MAX_NAME_ATTEMPTS: usize = 8;

/// Header block shared by every export format.
pub fn meta_rows(profile: &ProfileReference) -> [[&str; 2]; 3] {
    [
        ["Given URL:", profile.raw_input_url()],
        ["Username:", profile.username()],
        ["UserID:", profile.identifier()],
    ]
}

/// `fb-linkgen_<username>_<date>_<suffix>`; the id stands in for an empty username.
pub fn export_stem(profile: &ProfileReference, date: &str, suffix: &str) -> String {
    let who = sanitize_filename_part(profile.username(), profile.identifier());
    format!("{EXPORT_PREFIX}_{who}_{date}_{suffix}")
}

pub fn random_suffix<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

pub fn today() -> String {
    Local::now().format(EXPORT_DATE_FORMAT).to_string()
}

/// Write `links` for `profile` into the configured folder.
/// Returns the final path written to.
pub fn export_links(
    export: &ExportOptions,
    profile: &ProfileReference,
    links: &[GeneratedLink],
) -> Result<PathBuf, ExportError> {
    ensure_directory(export.out_dir())?;

    let date = today();
    let mut rng = rand::thread_rng();
    let mut path = export.file_path(&export_stem(profile, &date, &random_suffix(&mut rng, EXPORT_SUFFIX_LEN)));
    for _ in 1..MAX_NAME_ATTEMPTS {
        if !path.exists() {
            break;
        }
        logd!("Export: {} exists, picking another suffix", path.display());
        path = export.file_path(&export_stem(profile, &date, &random_suffix(&mut rng, EXPORT_SUFFIX_LEN)));
    }

    write_export(&path, export.format, profile, links)?;
    logf!("Export: OK {:?} rows={} → {}", export.format, links.len(), path.display());
    Ok(path)
}

/// Write one file at exactly `path` in the given format (truncates).
pub fn write_export(
    path: &Path,
    format: ExportFormat,
    profile: &ProfileReference,
    links: &[GeneratedLink],
) -> Result<(), ExportError> {
    match format.delimiter() {
        None => xlsx::write_links_xlsx(path, profile, links)?,
        Some(sep) => {
            let out = BufWriter::new(File::create(path)?);
            csv::write_links(out, profile, links, sep)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
