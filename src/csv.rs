// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::TABLE_HEADERS;
use crate::file::meta_rows;
use crate::links::GeneratedLink;
use crate::profile::ProfileReference;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Metadata block, blank line, then the `Link Type,URL` table.
pub fn write_links<W: Write>(
    mut w: W,
    profile: &ProfileReference,
    links: &[GeneratedLink],
    sep: char,
) -> io::Result<()> {
    for row in meta_rows(profile) {
        write_row(&mut w, &row, sep)?;
    }
    writeln!(w)?;
    write_row(&mut w, &TABLE_HEADERS, sep)?;
    for link in links {
        write_row(&mut w, &[link.label.as_str(), link.url.as_str()], sep)?;
    }
    w.flush()
}

/// Clipboard form: `label<TAB>url` per line, no metadata or header.
pub fn links_to_clipboard_text(links: &[GeneratedLink]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for link in links {
        let _ = write_row(&mut buf, &[link.label.as_str(), link.url.as_str()], '\t');
    }
    bytes_to_string(buf)
}

fn bytes_to_string(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &["b,c", "d"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "b,c\td\n");
    }

    #[test]
    fn clipboard_is_tab_separated() {
        let links = vec![
            GeneratedLink { label: s!("Groups"), url: s!("https://x/1/groups") },
            GeneratedLink { label: s!("Apps"), url: s!("https://x/1/apps") },
        ];
        assert_eq!(
            links_to_clipboard_text(&links),
            "Groups\thttps://x/1/groups\nApps\thttps://x/1/apps\n"
        );
    }
}
