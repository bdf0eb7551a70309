//! Orphan report export.
//!
//! The report is written with the temp-file-then-rename pattern: rows
//! go to a sibling `.tmp` file first, which is renamed over the target
//! only after the write succeeds. A crash mid-write leaves any
//! previous report intact.

use crate::error::Result;
use sightline_snapshot::Dataset;
use std::path::{Path, PathBuf};

/// Default file name for the orphan report.
pub const ORPHAN_REPORT_FILE_NAME: &str = "orphan_datasets.csv";

/// Renders the orphan report as CSV with a `name,id` header.
///
/// Fields containing commas, quotes, or line breaks are quoted with
/// doubled inner quotes; everything else is written bare. The output
/// always ends with a newline, including the header-only empty report.
#[must_use]
pub fn orphan_report_csv(orphans: &[&Dataset]) -> String {
    let mut out = String::from("name,id\n");
    for dataset in orphans {
        out.push_str(&csv_field(&dataset.name));
        out.push(',');
        out.push_str(&csv_field(&dataset.id));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Atomically writes the orphan report to `path`.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or the
/// rename to the target path fails. On failure the temporary file is
/// removed best-effort and any existing report is left unchanged.
pub async fn export_orphans_csv(path: impl AsRef<Path>, orphans: &[&Dataset]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    let report = orphan_report_csv(orphans);
    if let Err(e) = tokio::fs::write(&temp_path, &report).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }
    tokio::fs::rename(&temp_path, path).await?;

    tracing::debug!(
        path = %path.display(),
        rows = orphans.len(),
        "wrote orphan report"
    );
    Ok(())
}

/// Temp path for atomic writes, `report.csv` becoming `report.csv.tmp`.
fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => std::ffi::OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}
