// src/xlsx.rs
//
// Workbook layout: metadata block in A1:B3, link table from row 6, borders,
// no gridlines, 150% zoom, columns sized to their longest text.
use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use crate::config::consts::{SHEET_NAME, SHEET_ZOOM, TABLE_HEADERS, TABLE_HEADER_ROW};
use crate::file::meta_rows;
use crate::links::GeneratedLink;
use crate::profile::ProfileReference;

pub fn write_links_xlsx(
    path: &Path,
    profile: &ProfileReference,
    links: &[GeneratedLink],
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.set_screen_gridlines(false);
    sheet.set_zoom(SHEET_ZOOM);

    let cell = Format::new().set_border(FormatBorder::Thin);
    let meta_label = cell.clone().set_bold().set_align(FormatAlign::Right);
    let meta_value = cell.clone().set_align(FormatAlign::Left);
    let header = cell.clone().set_bold().set_align(FormatAlign::Center);

    let mut widths = [0usize; 2];
    let mut track = |col: usize, text: &str| {
        widths[col] = widths[col].max(text.chars().count());
    };

    for (row, [label, value]) in meta_rows(profile).into_iter().enumerate() {
        let row = row as u32;
        sheet.write_string_with_format(row, 0, label, &meta_label)?;
        sheet.write_string_with_format(row, 1, value, &meta_value)?;
        track(0, label);
        track(1, value);
    }

    // The spacer row above the table is bordered too.
    let spacer = TABLE_HEADER_ROW - 1;
    sheet.write_blank(spacer, 0, &cell)?;
    sheet.write_blank(spacer, 1, &cell)?;

    for (col, title) in TABLE_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(TABLE_HEADER_ROW, col as u16, *title, &header)?;
        track(col, *title);
    }

    for (i, link) in links.iter().enumerate() {
        let row = TABLE_HEADER_ROW + 1 + i as u32;
        sheet.write_string_with_format(row, 0, link.label.as_str(), &cell)?;
        sheet.write_string_with_format(row, 1, link.url.as_str(), &cell)?;
        track(0, &link.label);
        track(1, &link.url);
    }

    for (col, w) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, (*w + 2) as f64)?;
    }

    workbook.save(path)?;
    Ok(())
}
