//! JSON serialization for programmatic output.

use crate::session::{DatasetEntry, WorkspaceSummary};
use serde::Serialize;
use sightline_snapshot::{Dashboard, Dataset, DatasetArn};
use std::io::{self, Write};

fn write_pretty<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

pub(super) fn print_summary_json<W: Write>(
    w: &mut W,
    summary: &WorkspaceSummary,
) -> io::Result<()> {
    write_pretty(w, summary)
}

pub(super) fn print_dataset_listing_json<W: Write>(
    w: &mut W,
    entries: &[DatasetEntry],
) -> io::Result<()> {
    write_pretty(w, &entries)
}

pub(super) fn print_orphans_json<W: Write>(w: &mut W, orphans: &[&Dataset]) -> io::Result<()> {
    write_pretty(w, &orphans)
}

#[derive(Serialize)]
struct ImpactReport<'a> {
    dataset: &'a str,
    arn: &'a str,
    affected_dashboards: Vec<ImpactedDashboard<'a>>,
}

#[derive(Serialize)]
struct ImpactedDashboard<'a> {
    id: &'a str,
    name: &'a str,
}

pub(super) fn print_impact_json<W: Write>(
    w: &mut W,
    name: &str,
    arn: &DatasetArn,
    affected: &[&Dashboard],
) -> io::Result<()> {
    let report = ImpactReport {
        dataset: name,
        arn: arn.as_str(),
        affected_dashboards: affected
            .iter()
            .map(|dashboard| ImpactedDashboard {
                id: &dashboard.id,
                name: &dashboard.name,
            })
            .collect(),
    };
    write_pretty(w, &report)
}
