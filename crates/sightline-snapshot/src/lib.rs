//! Snapshot model and loading for BI workspace governance.
//!
//! This library provides the wire format and async loading for workspace
//! snapshots: a JSON document listing every dashboard and dataset in a BI
//! account, exported by an extraction script and analyzed by the `sightline`
//! tools.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod reader;

pub use error::{Error, Result};
pub use model::{Dashboard, Dataset, DatasetArn, Snapshot};
pub use reader::{load_snapshot, read_snapshot_from};
