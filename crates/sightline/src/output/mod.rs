//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors, icons)
//! - [`json`]: JSON serialization for programmatic output

pub mod color;
mod json;

use crate::session::{DatasetEntry, WorkspaceSummary};
use serde::Serialize;
use sightline_snapshot::{Dashboard, Dataset, DatasetArn};
use std::env;
use std::io::{self, Write};

pub use color::{error, info, success, warning};

use color::{
    bold, colored_usage_icon, colorize_arn, colorize_orphan_count, dimmed, success_icon,
    warning_icon,
};
use json::{print_dataset_listing_json, print_impact_json, print_orphans_json, print_summary_json};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
///
/// This struct holds settings that control how output is formatted,
/// including ASCII fallback mode and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    #[must_use]
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `SIGHTLINE_ASCII`: Set to "1" or "true" for ASCII-only icons (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `SIGHTLINE_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        let use_ascii = ascii_flag(env::var("SIGHTLINE_ASCII").ok());
        let use_colors = color_flag(
            env::var("NO_COLOR").is_ok(),
            env::var("SIGHTLINE_COLOR").ok(),
        );
        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

fn ascii_flag(value: Option<String>) -> bool {
    match value {
        Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
        Some(v) => {
            tracing::warn!(
                env_var = "SIGHTLINE_ASCII",
                value = %v,
                "Invalid value (expected '1', 'true', '0', or 'false'), using default"
            );
            false
        }
        None => false,
    }
}

// Respect the NO_COLOR standard (https://no-color.org/)
// Also support SIGHTLINE_COLOR for explicit control
fn color_flag(no_color_set: bool, choice: Option<String>) -> bool {
    !no_color_set
        && choice
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true)
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print the workspace summary in the specified format
pub fn print_summary(summary: &WorkspaceSummary, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_summary_text(&mut handle, summary, &config),
        OutputMode::Json => print_summary_json(&mut handle, summary),
    }
}

/// Print the dataset listing in the specified format
pub fn print_dataset_listing(entries: &[DatasetEntry], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_dataset_listing_text(&mut handle, entries, &config),
        OutputMode::Json => print_dataset_listing_json(&mut handle, entries),
    }
}

/// Print the orphan datasets in the specified format
pub fn print_orphans(orphans: &[&Dataset], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_orphans_text(&mut handle, orphans, &config),
        OutputMode::Json => print_orphans_json(&mut handle, orphans),
    }
}

/// Print an impact report for one dataset in the specified format
pub fn print_impact(
    name: &str,
    arn: &DatasetArn,
    affected: &[&Dashboard],
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_impact_text(&mut handle, name, affected, &config),
        OutputMode::Json => print_impact_json(&mut handle, name, arn, affected),
    }
}

/// Print a simple message
pub fn print_message(msg: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{msg}")
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_summary_text<W: Write>(
    w: &mut W,
    summary: &WorkspaceSummary,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Workspace Summary", config))?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Total Dashboards:", config),
        summary.total_dashboards
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Total Datasets:", config),
        summary.total_datasets
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Orphan Datasets:", config),
        colorize_orphan_count(summary.orphan_datasets, config)
    )?;
    if summary.dangling_references > 0 {
        writeln!(
            w,
            "  {} {}",
            dimmed("Dangling References:", config),
            warning(&summary.dangling_references.to_string(), config)
        )?;
    }
    Ok(())
}

fn print_dataset_listing_text<W: Write>(
    w: &mut W,
    entries: &[DatasetEntry],
    config: &OutputConfig,
) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(w, "No datasets found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} dataset(s):", entries.len())?;
    writeln!(w)?;

    for entry in entries {
        writeln!(
            w,
            "{} {}  {}  {}",
            colored_usage_icon(entry.orphan, config),
            entry.name,
            dimmed(&entry.id, config),
            colorize_arn(entry.arn.as_str(), config)
        )?;
    }

    Ok(())
}

fn print_orphans_text<W: Write>(
    w: &mut W,
    orphans: &[&Dataset],
    config: &OutputConfig,
) -> io::Result<()> {
    if orphans.is_empty() {
        writeln!(
            w,
            "{} No orphans found! Your environment is clean.",
            success_icon(config)
        )?;
        return Ok(());
    }

    writeln!(w, "Found {} orphan dataset(s):", orphans.len())?;
    writeln!(w)?;

    for dataset in orphans {
        writeln!(
            w,
            "{} {}  {}",
            colored_usage_icon(true, config),
            dataset.name,
            dimmed(&dataset.id, config)
        )?;
    }

    Ok(())
}

fn print_impact_text<W: Write>(
    w: &mut W,
    name: &str,
    affected: &[&Dashboard],
    config: &OutputConfig,
) -> io::Result<()> {
    if affected.is_empty() {
        writeln!(
            w,
            "{} {}",
            success_icon(config),
            success(
                &format!("Safe. '{name}' is not currently used by any Dashboard."),
                config
            )
        )?;
        return Ok(());
    }

    writeln!(
        w,
        "{} {}",
        warning_icon(config),
        error(
            &format!(
                "Warning! Modifying '{name}' will impact {} Dashboard(s):",
                affected.len()
            ),
            config
        )
    )?;
    for dashboard in affected {
        writeln!(
            w,
            "  - {} {}",
            dashboard.name,
            dimmed(&format!("({})", dashboard.id), config)
        )?;
    }

    Ok(())
}
