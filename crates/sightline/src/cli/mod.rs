//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for sightline using clap's
//! derive API. Each command has its own argument struct with validation and
//! helpful error messages.
//!
//! # Commands
//!
//! - `summary`: Show workspace summary counts
//! - `datasets`: List datasets with usage status
//! - `orphans`: Find orphan datasets, optionally exporting a CSV report
//! - `impact`: Show which dashboards a dataset change would affect
//! - `graph`: Export the lineage graph as JSON or DOT
//!
//! # Global Flags
//!
//! - `--snapshot <PATH>`: Snapshot file to load (default: `qs_snapshot.json`)
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! sightline summary
//! sightline orphans --csv cleanup.csv
//! sightline impact --name "Orders"
//! sightline graph --format dot > lineage.dot
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{GraphArgs, ImpactArgs, OrphansArgs};

// Re-export types
pub use types::GraphFormatArg;

// Re-export validators for external use
pub use validators::{validate_dataset_arn, validate_dataset_name};

/// Sightline - workspace governance for BI dashboards and datasets
///
/// Audit which datasets your dashboards actually use: find orphans,
/// measure the blast radius of a dataset change, and export the lineage
/// graph. Reads a JSON snapshot exported from the workspace.
#[derive(Parser, Debug)]
#[command(name = "sightline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the workspace snapshot JSON file
    #[arg(
        short = 's',
        long,
        global = true,
        value_name = "PATH",
        default_value = "qs_snapshot.json"
    )]
    pub snapshot: PathBuf,

    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show workspace summary counts
    ///
    /// Displays dashboard, dataset, and orphan counts for the loaded
    /// snapshot, plus dangling references when any exist.
    Summary,

    /// List datasets with usage status
    ///
    /// Shows every dataset in the snapshot sorted by name, marking the
    /// ones no dashboard references.
    Datasets,

    /// Find orphan datasets
    ///
    /// Lists datasets no dashboard references. Use `--csv` to export
    /// the report for cleanup tracking.
    Orphans(OrphansArgs),

    /// Analyze the impact of changing a dataset
    ///
    /// Shows every dashboard that reads the dataset, looked up by
    /// display name or by ARN.
    Impact(ImpactArgs),

    /// Export the lineage graph
    ///
    /// Emits the dashboard-to-dataset usage graph as renderer-ready
    /// JSON or Graphviz DOT source.
    Graph(GraphArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Summary) => {
                let session = self.load_session().await?;
                execute::execute_summary(&session, output_mode).await
            }
            Some(Commands::Datasets) => {
                let session = self.load_session().await?;
                execute::execute_datasets(&session, output_mode).await
            }
            Some(Commands::Orphans(args)) => {
                let session = self.load_session().await?;
                execute::execute_orphans(&session, args, output_mode).await
            }
            Some(Commands::Impact(args)) => {
                let session = self.load_session().await?;
                execute::execute_impact(&session, args, output_mode).await
            }
            Some(Commands::Graph(args)) => {
                let session = self.load_session().await?;
                execute::execute_graph(&session, args, output_mode).await
            }
            None => {
                println!("Sightline workspace governance");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }

    async fn load_session(&self) -> Result<crate::session::Session> {
        crate::session::Session::load(&self.snapshot)
            .await
            .with_context(|| {
                format!(
                    "failed to load snapshot from '{}'",
                    self.snapshot.display()
                )
            })
    }
}
