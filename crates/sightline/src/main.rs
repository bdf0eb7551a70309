//! Sightline CLI binary.

use anyhow::Result;
use sightline::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the sightline CLI.
///
/// Uses tokio's current_thread runtime for simplicity and lower overhead.
/// This is appropriate for CLI applications with sequential I/O-bound operations.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=sightline=debug,sightline_snapshot=trace cargo run
    // Diagnostics go to stderr; stdout stays parseable in --json mode
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sightline=info,sightline_snapshot=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting sightline CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Sightline CLI completed successfully");
    Ok(())
}
