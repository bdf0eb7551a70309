//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::{Context, Result};

use super::args::{GraphArgs, ImpactArgs, OrphansArgs};
use super::types::GraphFormatArg;
use crate::output::OutputMode;
use crate::session::Session;

/// Execute the summary command
pub async fn execute_summary(session: &Session, output_mode: OutputMode) -> Result<()> {
    use crate::output;

    output::print_summary(&session.summary(), output_mode)?;
    Ok(())
}

/// Execute the datasets command
pub async fn execute_datasets(session: &Session, output_mode: OutputMode) -> Result<()> {
    use crate::output;

    output::print_dataset_listing(&session.dataset_listing(), output_mode)?;
    Ok(())
}

/// Execute the orphans command
pub async fn execute_orphans(
    session: &Session,
    args: &OrphansArgs,
    output_mode: OutputMode,
) -> Result<()> {
    use crate::output;

    let orphans = session.orphans();
    output::print_orphans(&orphans, output_mode)?;

    if let Some(path) = &args.csv {
        crate::export::export_orphans_csv(path, &orphans)
            .await
            .with_context(|| format!("failed to write orphan report to '{}'", path.display()))?;
        if output_mode == OutputMode::Text {
            let config = output::OutputConfig::from_env();
            output::print_message(&output::success(
                &format!("Orphan report written to {}", path.display()),
                &config,
            ))?;
        }
    }

    Ok(())
}

/// Execute the impact command
pub async fn execute_impact(
    session: &Session,
    args: &ImpactArgs,
    output_mode: OutputMode,
) -> Result<()> {
    use crate::output;
    use sightline_snapshot::DatasetArn;

    let (display_name, arn) = match (&args.name, &args.arn) {
        (Some(name), _) => {
            let dataset = session
                .resolve_dataset_by_name(name)
                .ok_or_else(|| crate::Error::DatasetNotFound { name: name.clone() })?;
            (dataset.name.clone(), dataset.arn.clone())
        }
        (None, Some(arn)) => {
            // An unknown ARN is not an error: dangling references mean a
            // dashboard can depend on a dataset the snapshot lacks.
            let arn = DatasetArn::from(arn.as_str());
            (session.index().display_name(&arn).to_string(), arn)
        }
        (None, None) => anyhow::bail!("either --name or --arn is required"),
    };

    let affected = session.impact(&arn);
    output::print_impact(&display_name, &arn, &affected, output_mode)?;
    Ok(())
}

/// Execute the graph command
///
/// The `--format` flag picks the representation, so the global `--json`
/// flag has no effect here.
pub async fn execute_graph(
    session: &Session,
    args: &GraphArgs,
    _output_mode: OutputMode,
) -> Result<()> {
    use crate::output;

    let graph = session.graph();
    match args.format {
        GraphFormatArg::Json => output::print_json(&graph.description())?,
        GraphFormatArg::Dot => output::print_message(graph.to_dot().trim_end())?,
    }
    Ok(())
}
