//! Snapshot reading operations.
//!
//! This module provides async loading of snapshot documents from files or
//! any other async byte source. A snapshot is read fully into memory and
//! parsed in one step; documents are sized for interactive use (thousands
//! of records), so there is no streaming parse.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

use crate::error::Result;
use crate::model::Snapshot;

/// Loads a snapshot document from a file path.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) when the file cannot be opened
/// or read, and [`Error::Json`](crate::Error::Json) when the document is
/// malformed or missing required keys. A failed load is fatal to the
/// caller's session; no analysis runs on a partial snapshot.
///
/// # Examples
///
/// ```no_run
/// use sightline_snapshot::load_snapshot;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let snapshot = load_snapshot("qs_snapshot.json").await?;
/// println!("{} dashboards", snapshot.dashboards.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let file = File::open(path).await?;
    let snapshot = read_snapshot_from(file).await?;
    tracing::debug!(
        path = %path.display(),
        dashboards = snapshot.dashboards.len(),
        datasets = snapshot.datasets.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Reads a snapshot document from any async byte source.
///
/// The source is buffered and read to its end before parsing. This is the
/// building block behind [`load_snapshot`]; use it directly when the
/// snapshot arrives from something other than a file.
///
/// # Errors
///
/// Returns an error when reading fails or the document does not parse as
/// a snapshot.
pub async fn read_snapshot_from<R>(reader: R) -> Result<Snapshot>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Snapshot::from_slice(&buf)
}
