//! Read client tables and template headers from spreadsheet files

use std::io::{Read, Seek};
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};

use super::values::{cell_to_value, header_names};
use crate::transfer::Table;

/// Read the named sheet (or the first one) of a workbook as a table
pub fn read_source_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;
    let range = load_range(&mut workbook, sheet)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    log::debug!("Read {} ({}x{} cells)", path.display(), range.height(), range.width());
    range_to_table(&range).with_context(|| format!("Invalid spreadsheet: {}", path.display()))
}

/// Same as `read_source_table`, from an in-memory or seekable source
pub fn read_source_table_from_reader<R>(reader: R, sheet: Option<&str>) -> Result<Table>
where
    R: Read + Seek + Clone,
{
    let mut workbook = open_workbook_auto_from_rs(reader).context("Failed to open spreadsheet")?;
    let range = load_range(&mut workbook, sheet)?;
    range_to_table(&range)
}

/// Column names from the header row of the template's first sheet
pub fn read_template_columns(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open template: {}", path.display()))?;
    let range = load_range(&mut workbook, None)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    header_row(&range).with_context(|| format!("Invalid template: {}", path.display()))
}

/// Same as `read_template_columns`, from an in-memory or seekable source
pub fn read_template_columns_from_reader<R>(reader: R) -> Result<Vec<String>>
where
    R: Read + Seek + Clone,
{
    let mut workbook = open_workbook_auto_from_rs(reader).context("Failed to open template")?;
    let range = load_range(&mut workbook, None)?;
    header_row(&range)
}

/// Sheet names of a workbook, in workbook order
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;
    Ok(workbook.sheet_names())
}

fn load_range<RS>(workbook: &mut Sheets<RS>, sheet: Option<&str>) -> Result<Range<Data>>
where
    RS: Read + Seek,
{
    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                bail!(
                    "Sheet '{}' not found (available: {})",
                    name,
                    sheet_names.join(", ")
                );
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .context("Spreadsheet has no sheets")?
            .clone(),
    };

    workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))
}

fn header_row(range: &Range<Data>) -> Result<Vec<String>> {
    let header = range
        .rows()
        .next()
        .context("Sheet has no header row")?;
    Ok(header_names(header))
}

fn range_to_table(range: &Range<Data>) -> Result<Table> {
    let columns = header_row(range)?;
    let mut table = Table::new(columns);

    for row in range.rows().skip(1) {
        table.push_row(row.iter().map(cell_to_value).collect());
    }

    Ok(table)
}
