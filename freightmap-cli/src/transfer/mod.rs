//! Freight data mapping onto the Scope 3 template
//!
//! This module reads client spreadsheets, maps their columns onto the
//! template's columns, adds the emission-factor constants and writes the
//! cleaned result back out as xlsx.

pub mod excel;
pub mod transform;
pub mod types;

pub use excel::{read_source_table, write_result_excel};
pub use transform::{ProcessReport, process_files};
pub use types::*;
