use clap::Parser;
use colored::*;

mod cli;
mod config;
mod services;
mod transfer;

use cli::commands::{columns, process};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Process(args) => process::handle_process_command(args),
        Commands::Columns(args) => columns::handle_columns_command(args),
    };

    if let Err(e) = result {
        log::debug!("{:?}", e);
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
