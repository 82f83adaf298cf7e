//! Command-line interface orchestration for windrow.
//!
//! The `run` command loads a JSON garden document, forms clusters with the
//! requested policies and reports the successor table.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
