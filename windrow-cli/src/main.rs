//! Entry point for the `windrow` binary.
//!
//! Parses arguments, plans the requested garden, and prints the successor
//! table to stdout. Failures are logged with their stable error codes and
//! turn into a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use windrow_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to plan garden")?;
    let mut writer = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut writer).context("failed to render successor table")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = try_main() else {
        return ExitCode::SUCCESS;
    };

    let message = format!("{err:#}");
    let (code, configuration_code) = match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => (Some(core.code()), core.configuration_code()),
        _ => (None, None),
    };
    error!(
        error = %message,
        code = code.map(|code| field::display(code.as_str())),
        configuration_code = configuration_code.map(|code| field::display(code.as_str())),
        "command execution failed"
    );
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available when its own setup fails"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
