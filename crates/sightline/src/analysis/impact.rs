//! Impact analysis.

use sightline_snapshot::{Dashboard, Dataset, DatasetArn};

/// Dashboards whose reference list contains `arn`, in document order.
///
/// Listing a dataset more than once still yields the dashboard once;
/// the query is a membership test, not a reference count.
#[must_use]
pub fn affected_dashboards<'a>(
    arn: &DatasetArn,
    dashboards: &'a [Dashboard],
) -> Vec<&'a Dashboard> {
    dashboards
        .iter()
        .filter(|dashboard| dashboard.used_datasets.contains(arn))
        .collect()
}

/// First dataset in document order whose name matches exactly.
///
/// Names are not unique across a workspace. When several datasets
/// share one name this resolves to the earliest record and the others
/// are unreachable by name; querying by ARN is the unambiguous path.
#[must_use]
pub fn resolve_dataset_by_name<'a>(name: &str, datasets: &'a [Dataset]) -> Option<&'a Dataset> {
    datasets.iter().find(|dataset| dataset.name == name)
}
