//! Orphan detection.

use crate::index::LineageIndex;
use sightline_snapshot::Dataset;

/// Datasets no dashboard references, in document order.
///
/// A dataset is an orphan exactly when its ARN appears in no
/// dashboard's reference list. Dangling references have no effect
/// here: they can never make a defined dataset an orphan, only a
/// referenced one.
#[must_use]
pub fn find_orphans<'a>(datasets: &'a [Dataset], index: &LineageIndex) -> Vec<&'a Dataset> {
    datasets
        .iter()
        .filter(|dataset| !index.is_referenced(&dataset.arn))
        .collect()
}
