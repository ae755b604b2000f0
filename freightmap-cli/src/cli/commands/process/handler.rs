//! Process command handler

use std::path::Path;

use anyhow::{Result, bail};
use colored::*;
use is_terminal::IsTerminal;

use super::ProcessCommands;
use crate::cli::preview::render_preview;
use crate::config::{Config, Mode};
use crate::services::selection::{TerminalPicker, acquire_mapping};
use crate::transfer::{ProcessReport, process_files, write_result_excel};

/// Handle the process command: read, map, clean, write
pub fn handle_process_command(args: ProcessCommands) -> Result<()> {
    // Handle --no-color flag
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(args.config.as_deref())?;
    let mode = args.mode_override().unwrap_or(config.mode);
    let template = args.template.clone().unwrap_or(config.template);
    let output = args.output.clone().unwrap_or(config.output);
    let preview_rows = args.preview.unwrap_or(config.preview_rows);

    if !args.source.exists() {
        bail!("Client file does not exist: {}", args.source.display());
    }
    if !template.exists() {
        bail!(
            "Template file does not exist: {} (set it with --template or in the config file)",
            template.display()
        );
    }
    if mode == Mode::Interactive && !std::io::stdin().is_terminal() {
        bail!("Interactive mapping needs a terminal; use --static or --column FIELD=SOURCE instead");
    }

    log::info!("Mapping {} onto {} ({} mode)", args.source.display(), template.display(), mode);

    let mut picker = TerminalPicker;
    let report = process_files(&args.source, args.sheet.as_deref(), &template, |source| {
        acquire_mapping(mode, &source.columns, &args.columns, &mut picker)
    })?;
    print_warnings(&report);

    write_result_excel(&report.table, &output)?;

    print_summary(&report, &output);
    if preview_rows > 0 && report.kept_rows() > 0 {
        print_preview(&report, preview_rows);
    }

    Ok(())
}

fn print_warnings(report: &ProcessReport) {
    for warning in &report.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}

fn print_summary(report: &ProcessReport, output: &Path) {
    println!(
        "Kept {} of {} rows ({} dropped), {} columns",
        report.kept_rows().to_string().bright_green(),
        report.source_rows,
        report.dropped_rows,
        report.table.column_count()
    );

    if report.kept_rows() == 0 && report.source_rows > 0 && !report.empty_columns.is_empty() {
        println!(
            "{} every row was dropped because these columns are empty: {}",
            "hint:".cyan().bold(),
            report.empty_columns.join(", ")
        );
    }

    println!("Saved to {}", output.display().to_string().bright_green());
}

fn print_preview(report: &ProcessReport, rows: usize) {
    println!();
    for (idx, line) in render_preview(&report.table, rows).into_iter().enumerate() {
        if idx == 0 {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}
