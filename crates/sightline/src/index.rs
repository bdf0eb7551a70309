//! Derived lookup state for one loaded snapshot.
//!
//! The index is rebuilt from scratch on every snapshot load and never
//! mutated afterwards. All analysis queries answer from it; nothing is
//! recomputed per query.

use sightline_snapshot::{DatasetArn, Snapshot};
use std::collections::{HashMap, HashSet};

/// Display name used for references to datasets the snapshot does not
/// define.
pub const UNKNOWN_DATASET: &str = "Unknown Dataset";

/// ARN-keyed lookup state derived from a snapshot.
///
/// Two structures cover every query the analysis layer makes: the
/// name mapping (for display) and the referenced set (for orphan and
/// usage checks). Both are keyed by ARN; display names are never used
/// as keys because they are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageIndex {
    /// Display name per dataset ARN.
    ///
    /// Duplicate ARNs in the snapshot keep the last record's name.
    name_by_arn: HashMap<DatasetArn, String>,

    /// Every ARN appearing in any dashboard's reference list.
    referenced: HashSet<DatasetArn>,

    /// Distinct referenced ARNs with no dataset record.
    dangling: usize,
}

impl LineageIndex {
    /// Builds the index in one pass over each snapshot sequence.
    ///
    /// Dangling references are counted and logged here, once per load,
    /// rather than rediscovered on every lookup.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let name_by_arn: HashMap<DatasetArn, String> = snapshot
            .datasets
            .iter()
            .map(|dataset| (dataset.arn.clone(), dataset.name.clone()))
            .collect();

        let referenced: HashSet<DatasetArn> = snapshot
            .dashboards
            .iter()
            .flat_map(|dashboard| dashboard.used_datasets.iter().cloned())
            .collect();

        let dangling = referenced
            .iter()
            .filter(|arn| !name_by_arn.contains_key(*arn))
            .count();
        if dangling > 0 {
            tracing::warn!(
                count = dangling,
                "dashboards reference datasets the snapshot does not define"
            );
        }

        tracing::debug!(
            datasets = name_by_arn.len(),
            referenced = referenced.len(),
            "built lineage index"
        );

        Self {
            name_by_arn,
            referenced,
            dangling,
        }
    }

    /// Display name for an ARN, or [`UNKNOWN_DATASET`] when the snapshot
    /// defines no dataset with that ARN. Never fails.
    #[must_use]
    pub fn display_name<'a>(&'a self, arn: &DatasetArn) -> &'a str {
        self.name_by_arn
            .get(arn)
            .map_or(UNKNOWN_DATASET, String::as_str)
    }

    /// Whether any dashboard references this ARN.
    #[must_use]
    pub fn is_referenced(&self, arn: &DatasetArn) -> bool {
        self.referenced.contains(arn)
    }

    /// Number of distinct ARNs referenced by at least one dashboard.
    #[must_use]
    pub fn referenced_count(&self) -> usize {
        self.referenced.len()
    }

    /// Number of distinct referenced ARNs that have no dataset record.
    #[must_use]
    pub fn dangling_reference_count(&self) -> usize {
        self.dangling
    }
}
