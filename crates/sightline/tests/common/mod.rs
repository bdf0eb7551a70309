//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/sightline to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_sightline_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "sightline", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build sightline");

    assert!(status.success(), "Failed to build sightline binary");

    workspace.join("target/debug/sightline")
}

/// Run the sightline binary directly in the specified directory
pub fn run_sightline_in_dir(dir: &Path, args: &[&str]) -> Output {
    run_sightline_with_env(dir, args, &[])
}

/// Run the sightline binary with extra environment variables set
pub fn run_sightline_with_env(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let binary = get_sightline_binary();

    let mut command = Command::new(&binary);
    command.args(args).current_dir(dir);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Failed to execute sightline binary")
}

/// Write a snapshot file with the default name into `dir`
pub fn write_snapshot(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("qs_snapshot.json");
    std::fs::write(&path, contents).expect("Failed to write snapshot file");
    path
}
