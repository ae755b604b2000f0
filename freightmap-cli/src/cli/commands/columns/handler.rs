//! Columns command handler

use anyhow::{Result, bail};
use colored::*;

use super::ColumnsCommands;
use crate::transfer::excel::list_sheets;
use crate::transfer::{Table, read_source_table};

/// List sheets and the header of one sheet, with how many rows fill each column
pub fn handle_columns_command(args: ColumnsCommands) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    if !args.file.exists() {
        bail!("File does not exist: {}", args.file.display());
    }

    let sheets = list_sheets(&args.file)?;
    let table = read_source_table(&args.file, args.sheet.as_deref())?;
    let sheet = args
        .sheet
        .clone()
        .or_else(|| sheets.first().cloned())
        .unwrap_or_default();

    println!("Sheets: {}", sheets.join(", "));
    println!(
        "Sheet {} ({} data rows):",
        sheet.bright_green(),
        table.row_count()
    );

    for line in column_lines(&table) {
        println!("  {}", line);
    }

    Ok(())
}

fn column_lines(table: &Table) -> Vec<String> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let filled = table.column_values(idx).filter(|v| !v.is_null()).count();
            format!("{:>3}. {} ({}/{} filled)", idx + 1, name, filled, table.row_count())
        })
        .collect()
}
