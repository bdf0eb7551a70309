//! One loaded snapshot plus its derived lookup state.

use crate::analysis;
use crate::error::Result;
use crate::graph::LineageGraph;
use crate::index::LineageIndex;
use serde::Serialize;
use sightline_snapshot::{Dashboard, Dataset, DatasetArn, Snapshot};
use std::path::Path;

/// A snapshot and the index derived from it, built once per load.
///
/// Every query below answers from the same snapshot the session was
/// created with. The file on disk is never re-read; load a new session
/// to pick up a newer export.
#[derive(Debug)]
pub struct Session {
    snapshot: Snapshot,
    index: LineageIndex,
}

/// Workspace-level counts for the summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkspaceSummary {
    /// Dashboards in the snapshot.
    pub total_dashboards: usize,
    /// Datasets in the snapshot.
    pub total_datasets: usize,
    /// Datasets no dashboard references.
    pub orphan_datasets: usize,
    /// Distinct referenced ARNs with no dataset record.
    pub dangling_references: usize,
}

/// One row of the dataset listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetEntry {
    /// Dataset display name.
    pub name: String,
    /// Dataset id from the snapshot.
    pub id: String,
    /// Dataset ARN.
    pub arn: DatasetArn,
    /// Whether no dashboard references this dataset.
    pub orphan: bool,
}

impl Session {
    /// Loads a snapshot from disk and indexes it.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let snapshot = sightline_snapshot::load_snapshot(path).await?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Builds a session around an already parsed snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let index = LineageIndex::from_snapshot(&snapshot);
        Self { snapshot, index }
    }

    /// The snapshot this session was loaded from.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The lookup index derived from the snapshot.
    #[must_use]
    pub fn index(&self) -> &LineageIndex {
        &self.index
    }

    /// Workspace counts for the summary view.
    #[must_use]
    pub fn summary(&self) -> WorkspaceSummary {
        WorkspaceSummary {
            total_dashboards: self.snapshot.dashboards.len(),
            total_datasets: self.snapshot.datasets.len(),
            orphan_datasets: self.orphans().len(),
            dangling_references: self.index.dangling_reference_count(),
        }
    }

    /// Datasets no dashboard references, in document order.
    #[must_use]
    pub fn orphans(&self) -> Vec<&Dataset> {
        analysis::find_orphans(&self.snapshot.datasets, &self.index)
    }

    /// Dashboards that would be affected by changing `arn`.
    #[must_use]
    pub fn impact(&self, arn: &DatasetArn) -> Vec<&Dashboard> {
        analysis::affected_dashboards(arn, &self.snapshot.dashboards)
    }

    /// First dataset in document order with this exact name.
    #[must_use]
    pub fn resolve_dataset_by_name(&self, name: &str) -> Option<&Dataset> {
        analysis::resolve_dataset_by_name(name, &self.snapshot.datasets)
    }

    /// All datasets sorted by name, each flagged if orphaned.
    ///
    /// The sort is stable, so datasets sharing a name keep their
    /// document order relative to each other.
    #[must_use]
    pub fn dataset_listing(&self) -> Vec<DatasetEntry> {
        let mut entries: Vec<DatasetEntry> = self
            .snapshot
            .datasets
            .iter()
            .map(|dataset| DatasetEntry {
                name: dataset.name.clone(),
                id: dataset.id.clone(),
                arn: dataset.arn.clone(),
                orphan: !self.index.is_referenced(&dataset.arn),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Builds the lineage graph for this snapshot.
    #[must_use]
    pub fn graph(&self) -> LineageGraph {
        LineageGraph::build(&self.snapshot.dashboards, &self.index)
    }
}
