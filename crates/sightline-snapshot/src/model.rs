//! Wire types for workspace snapshot documents.
//!
//! A snapshot is a single JSON document with two top-level arrays:
//!
//! ```json
//! {
//!   "dashboards": [ { "id": "...", "name": "...", "used_datasets": ["arn:a", "arn:b"] } ],
//!   "datasets":   [ { "id": "...", "name": "...", "arn": "arn:a" } ]
//! }
//! ```
//!
//! Both arrays preserve document order, which downstream analysis relies on
//! for deterministic results. The only validation applied is key presence:
//! a document missing a required key fails to parse, unknown keys are
//! ignored, and no field value is inspected beyond its JSON type.
//!
//! # Examples
//!
//! ```
//! use sightline_snapshot::Snapshot;
//!
//! # fn main() -> Result<(), sightline_snapshot::Error> {
//! let snapshot: Snapshot = r#"{"dashboards": [], "datasets": []}"#.parse()?;
//! assert!(snapshot.dashboards.is_empty());
//! assert!(snapshot.datasets.is_empty());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Unique identifier for a dataset.
///
/// The ARN is the only unique key a dataset carries; display names may
/// collide across datasets. All derived lookups key on this type, with
/// names used for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetArn(pub String);

impl DatasetArn {
    /// Create a new dataset ARN
    pub fn new(arn: impl Into<String>) -> Self {
        Self(arn.into())
    }

    /// The ARN as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DatasetArn {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DatasetArn {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A dashboard record from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Workspace-assigned dashboard ID
    pub id: String,

    /// Display name shown to operators
    pub name: String,

    /// ARNs of the datasets this dashboard reads, in reference order.
    ///
    /// May contain duplicates, and may reference ARNs with no matching
    /// record in [`Snapshot::datasets`] (a dangling reference). Dangling
    /// references are legal input and degrade to a placeholder name during
    /// analysis.
    pub used_datasets: Vec<DatasetArn>,
}

/// A dataset record from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Workspace-assigned dataset ID
    pub id: String,

    /// Display name; not guaranteed unique across datasets
    pub name: String,

    /// Unique identifier used for all dependency analysis
    pub arn: DatasetArn,
}

/// A complete workspace snapshot.
///
/// Immutable once loaded: a session owns exactly one snapshot, and
/// replacing it means building a new session. Records appear in document
/// order in both sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All dashboards in the workspace, in document order
    pub dashboards: Vec<Dashboard>,

    /// All datasets in the workspace, in document order
    pub datasets: Vec<Dataset>,
}

impl Snapshot {
    /// Parses a snapshot from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the document is not valid JSON or a
    /// required key (`dashboards`, `datasets`, or any per-record field) is
    /// missing.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl FromStr for Snapshot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
