//! Error types for snapshot loading.

use std::io;
use thiserror::Error;

/// The error type for snapshot loading operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading the snapshot.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON error: malformed document or missing required keys.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for snapshot loading operations.
pub type Result<T> = std::result::Result<T, Error>;
