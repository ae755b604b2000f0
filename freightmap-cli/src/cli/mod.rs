//! Command line interface

pub mod commands;
pub mod preview;

use clap::{Parser, Subcommand};

use commands::{ColumnsCommands, ProcessCommands};

#[derive(Parser, Debug)]
#[command(
    name = "freightmap",
    version,
    about = "Map client freight workbooks onto the Scope 3 freight template"
)]
pub struct Cli {
    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map a client file onto the template and write the result workbook
    Process(ProcessCommands),
    /// List the columns of a workbook sheet
    Columns(ColumnsCommands),
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
