//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use super::types::GraphFormatArg;
use super::validators::{validate_dataset_arn, validate_dataset_name};
use crate::export::ORPHAN_REPORT_FILE_NAME;

/// Arguments for the `orphans` command
#[derive(Parser, Debug, Clone, Default)]
pub struct OrphansArgs {
    /// Write the orphan report as CSV to the given path
    ///
    /// With no path, writes `orphan_datasets.csv` in the current
    /// directory. The file is replaced atomically.
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = ORPHAN_REPORT_FILE_NAME)]
    pub csv: Option<PathBuf>,
}

/// Arguments for the `impact` command
#[derive(Parser, Debug, Clone)]
pub struct ImpactArgs {
    /// Dataset display name to analyze
    ///
    /// Names are not unique across a workspace; when several datasets
    /// share the name, the first record in the snapshot is analyzed.
    /// Use `--arn` for an exact lookup.
    #[arg(
        long,
        value_parser = validate_dataset_name,
        conflicts_with = "arn",
        required_unless_present = "arn"
    )]
    pub name: Option<String>,

    /// Dataset ARN to analyze
    #[arg(long, value_parser = validate_dataset_arn)]
    pub arn: Option<String>,
}

/// Arguments for the `graph` command
#[derive(Parser, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Export format
    #[arg(long, value_enum, default_value = "json")]
    pub format: GraphFormatArg,
}
