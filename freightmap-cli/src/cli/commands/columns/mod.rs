//! `columns` command arguments

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_columns_command;

#[derive(Args, Debug)]
pub struct ColumnsCommands {
    /// Workbook to inspect
    pub file: PathBuf,

    /// Sheet to inspect (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
