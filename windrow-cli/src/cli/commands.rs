use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use windrow_core::{Garden, Load, PlanError, PlannerBuilder, RakingPlan};
use windrow_providers_json::{JsonGardenError, JsonGardenProvider};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "windrow", about = "Plan leaf-raking clusters for a garden.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Form clusters for a garden document and print the successor table.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the JSON garden document.
    pub path: PathBuf,

    /// Hub selection policy: `NW`, `LM_max` or `KP_min`.
    #[arg(long, default_value = "NW")]
    pub hub_selection: String,

    /// Candidate order policy: `NW`, `LM_max` or `LM_min`.
    #[arg(long, default_value = "NW")]
    pub candidate_order: String,

    /// Queue discipline: `FIFO` or `LIFO`.
    #[arg(long, default_value = "FIFO")]
    pub queue_discipline: String,

    /// Override the capacity stored in the document.
    #[arg(long, value_parser = clap::value_parser!(u64))]
    pub capacity: Option<Load>,

    /// Override name for the garden (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The garden document could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The garden document was malformed or inconsistent.
    #[error(transparent)]
    Garden(#[from] JsonGardenError),
    /// Policy parsing or planning failed.
    #[error(transparent)]
    Core(#[from] PlanError),
}

/// Outcome of a successful `run`.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the garden.
    pub garden: String,
    /// Clusters and successor table produced by the planner.
    pub plan: RakingPlan,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the document cannot be loaded, a policy name is
/// unknown, or planning fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use windrow_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"{"capacity": 2, "cells": [{"load": 1, "neighbours": [1]}, {"load": 1, "neighbours": [0]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         hub_selection: "NW".into(),
///         candidate_order: "NW".into(),
///         queue_discipline: "FIFO".into(),
///         capacity: None,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.plan.cluster_count(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(policies = field::Empty, capacity_override = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        hub_selection: hub,
        candidate_order: order,
        queue_discipline: queue,
        capacity,
        name,
    } = command;
    let planner = PlannerBuilder::from_names(&hub, &order, &queue)?.build();

    let span = Span::current();
    span.record("policies", field::display(planner.policies()));
    if let Some(capacity) = capacity {
        span.record("capacity_override", capacity);
    }

    let chosen_name = derive_garden_name(&path, name.as_deref());
    let mut garden = load_garden(chosen_name, &path)?;
    if let Some(capacity) = capacity {
        garden = garden.with_capacity(capacity);
    }
    let plan = planner.run(&garden)?;

    info!(
        garden = garden.name(),
        clusters = plan.cluster_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        garden: garden.name().to_owned(),
        plan,
    })
}

#[instrument(name = "cli.load_garden", err, skip(name), fields(path = field::Empty))]
pub(super) fn load_garden(name: String, path: &Path) -> Result<JsonGardenProvider, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    Ok(JsonGardenProvider::try_from_reader(name, reader)?)
}

pub(super) fn derive_garden_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "garden".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` as a header followed by one `<cell>\t<successor>` row
/// per cell, with `-` for blocked cells.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "garden: {}", summary.garden)?;
    writeln!(writer, "policies: {}", summary.plan.policies())?;
    writeln!(writer, "clusters: {}", summary.plan.cluster_count())?;
    for (cell, successor) in summary.plan.successors().rows() {
        writeln!(writer, "{cell}\t{successor}")?;
    }
    Ok(())
}
