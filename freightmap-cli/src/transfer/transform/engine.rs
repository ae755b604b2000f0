//! Processing pipeline - orchestrates mapping and cleaning of a client table

use std::path::Path;

use anyhow::Result;

use crate::transfer::excel::{read_source_table, read_template_columns};
use crate::transfer::{FieldMapping, Table};

use super::enrich::enrich_and_clean;
use super::mapper::{MappingWarning, map_columns};

/// Outcome of one processing run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessReport {
    /// Final table: template columns then constants, no nulls
    pub table: Table,
    /// Mapper diagnostics, in mapping order
    pub warnings: Vec<MappingWarning>,
    /// Rows read from the client file
    pub source_rows: usize,
    /// Rows removed because they had a missing value
    pub dropped_rows: usize,
    /// Template columns that were null in every source row, before cleaning
    pub empty_columns: Vec<String>,
}

impl ProcessReport {
    pub fn kept_rows(&self) -> usize {
        self.table.row_count()
    }
}

/// Map `source` onto the template and clean the result
pub fn process(source: &Table, template_columns: &[String], mapping: &FieldMapping) -> ProcessReport {
    log::debug!(
        "Processing {} rows x {} columns onto {} template columns ({} mapped fields)",
        source.row_count(),
        source.column_count(),
        template_columns.len(),
        mapping.len()
    );

    let mapped = map_columns(source, template_columns, mapping);
    for warning in &mapped.warnings {
        log::warn!("{}", warning);
    }

    let empty_columns = mapped
        .table
        .all_null_columns()
        .into_iter()
        .map(str::to_string)
        .collect();

    let table = enrich_and_clean(mapped.table);
    let dropped_rows = source.row_count() - table.row_count();

    log::info!(
        "Kept {} of {} rows ({} dropped), {} columns",
        table.row_count(),
        source.row_count(),
        dropped_rows,
        table.column_count()
    );

    ProcessReport {
        table,
        warnings: mapped.warnings,
        source_rows: source.row_count(),
        dropped_rows,
        empty_columns,
    }
}

/// Read the client file and the template, then run `process`.
/// `build_mapping` sees the client table first, so it can offer its columns.
pub fn process_files<F>(
    source_path: &Path,
    sheet: Option<&str>,
    template_path: &Path,
    build_mapping: F,
) -> Result<ProcessReport>
where
    F: FnOnce(&Table) -> Result<FieldMapping>,
{
    let source = read_source_table(source_path, sheet)?;
    let template_columns = read_template_columns(template_path)?;
    let mapping = build_mapping(&source)?;
    Ok(process(&source, &template_columns, &mapping))
}
