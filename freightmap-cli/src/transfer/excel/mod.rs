//! Spreadsheet import of client files and templates, xlsx export of results

mod reader;
mod values;
mod writer;

pub use reader::{
    list_sheets, read_source_table, read_source_table_from_reader, read_template_columns,
    read_template_columns_from_reader,
};
pub use writer::{result_excel_bytes, write_result_excel};
