use anyhow::{Context, Result};
use clap::Parser;
use list_todos::{ScanError, cli, config, logging, reporter, scanner, source};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    match scan_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn scan_command(cli: cli::Cli) -> Result<()> {
    let defaults =
        config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let configuration = cli.into_configuration(&defaults);

    debug!(?configuration, "starting scan");

    // Destination first, so an unwritable output fails before any input work
    let mut report = reporter::ReportWriter::open(&configuration.output)?;

    let name = scanner::resolve_display_name(&configuration)?;
    let mut source = source::LineSource::open(&configuration.file_path, configuration.line_size)
        .map_err(|source| ScanError::InputOpen {
            name: name.display().to_string(),
            source,
        })?;

    let summary = scanner::run(&configuration, &name, &mut source, &mut report)?;
    debug!(matches = summary.matches, "report written");

    Ok(())
}

fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<ScanError>() {
        // Warning already went to the report destination
        Some(ScanError::TruncationRisk { line_size, segment }) => {
            debug!(line_size, segment, "aborted on truncation risk");
        }
        Some(open @ ScanError::InputOpen { .. }) => eprintln!("{}", open),
        _ => eprintln!("Error: {:#}", err),
    }
}
