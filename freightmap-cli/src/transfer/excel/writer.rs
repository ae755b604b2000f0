//! Write the result table to xlsx

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::transfer::{Table, Value};

const SHEET_NAME: &str = "Sheet1";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Write a table to an xlsx file, replacing it if it exists
pub fn write_result_excel(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(table)?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;
    log::info!("Wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}

/// Serialize a table to xlsx bytes
pub fn result_excel_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(table)?;
    workbook
        .save_to_buffer()
        .context("Failed to serialize Excel workbook")
}

fn build_workbook(table: &Table) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            write_value(worksheet, row_num, col as u16, value, &datetime_format)?;
        }
    }

    worksheet.autofit();

    Ok(workbook)
}

fn write_value(ws: &mut Worksheet, row: u32, col: u16, value: &Value, datetime_format: &Format) -> Result<()> {
    match value {
        Value::Null => { /* Leave cell empty */ }
        Value::String(s) => { ws.write_string(row, col, s)?; }
        Value::Int(i) => { ws.write_number(row, col, *i as f64)?; }
        Value::Float(f) => { ws.write_number(row, col, *f)?; }
        Value::Bool(b) => { ws.write_boolean(row, col, *b)?; }
        Value::DateTime(dt) => { ws.write_datetime_with_format(row, col, dt, datetime_format)?; }
    }
    Ok(())
}
