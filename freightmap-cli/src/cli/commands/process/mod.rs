//! `process` command arguments

mod handler;

use std::path::PathBuf;

use clap::Args;

use crate::config::Mode;
use crate::services::selection::{ColumnOverride, parse_column_override};

pub use handler::handle_process_command;

#[derive(Args, Debug)]
pub struct ProcessCommands {
    /// Client workbook (.xls, .xlsx, .xlsm, .xlsb or .ods)
    pub source: PathBuf,

    /// Template workbook whose header defines the output columns
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Result workbook path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sheet of the client workbook to read (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Choose the client column for each template field
    #[arg(long, conflicts_with = "static_mode")]
    pub interactive: bool,

    /// Use the built-in column names
    #[arg(long = "static")]
    pub static_mode: bool,

    /// Map a template field to a client column, e.g. "Departure=Port of Loading"
    #[arg(short, long = "column", value_name = "FIELD=SOURCE", value_parser = parse_column_override)]
    pub columns: Vec<ColumnOverride>,

    /// Number of result rows to print (0 disables the preview)
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Config file (default: <config dir>/freightmap/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ProcessCommands {
    /// Mapping mode forced on the command line, if any
    pub fn mode_override(&self) -> Option<Mode> {
        if self.interactive {
            Some(Mode::Interactive)
        } else if self.static_mode {
            Some(Mode::Static)
        } else {
            None
        }
    }
}
