//! Error types for sightline operations.

use thiserror::Error;

/// The error type for sightline operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The snapshot could not be loaded or parsed. Fatal: analysis never
    /// runs on a partial snapshot.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] sightline_snapshot::Error),

    /// IO error while writing a report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No dataset in the snapshot carries the requested display name.
    ///
    /// Distinct from an empty impact set, which is a success ("safe to
    /// modify"); this means the operator named something that does not
    /// exist.
    #[error("no dataset named '{name}' in this snapshot")]
    DatasetNotFound {
        /// The display name that matched nothing.
        name: String,
    },
}

/// A specialized Result type for sightline operations.
pub type Result<T> = std::result::Result<T, Error>;
