//! Integration tests for the sightline CLI.
//!
//! These tests verify the end-to-end behavior of all CLI commands
//! against real snapshot files on disk.

use rstest::{fixture, rstest};
use std::process::Command;
use tempfile::TempDir;

mod common;
use common::{run_sightline_in_dir, run_sightline_with_env, write_snapshot};

/// Two dashboards over three datasets: `Orders` is referenced three
/// times (once duplicated), `Ledger` once, and `Archive` never.
const WORKSPACE_SNAPSHOT: &str = r#"{
    "dashboards": [
        {"id": "dash-1", "name": "Sales Overview", "used_datasets": ["arn:ds/orders", "arn:ds/orders"]},
        {"id": "dash-2", "name": "Finance", "used_datasets": ["arn:ds/orders", "arn:ds/ledger"]}
    ],
    "datasets": [
        {"id": "ds-1", "name": "Orders", "arn": "arn:ds/orders"},
        {"id": "ds-2", "name": "Ledger", "arn": "arn:ds/ledger"},
        {"id": "ds-3", "name": "Archive", "arn": "arn:ds/archive"}
    ]
}"#;

/// Every dataset referenced, nothing dangling.
const CLEAN_SNAPSHOT: &str = r#"{
    "dashboards": [
        {"id": "dash-1", "name": "Sales", "used_datasets": ["arn:ds/orders"]}
    ],
    "datasets": [
        {"id": "ds-1", "name": "Orders", "arn": "arn:ds/orders"}
    ]
}"#;

/// One reference points at a dataset the snapshot does not define.
const DANGLING_SNAPSHOT: &str = r#"{
    "dashboards": [
        {"id": "dash-1", "name": "Sales", "used_datasets": ["arn:ds/orders", "arn:ds/ghost"]}
    ],
    "datasets": [
        {"id": "ds-1", "name": "Orders", "arn": "arn:ds/orders"}
    ]
}"#;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Provides a temporary directory holding the workspace snapshot
#[fixture]
fn workspace_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    write_snapshot(temp.path(), WORKSPACE_SNAPSHOT);
    temp
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "--package", "sightline", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sightline"));
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "--package", "sightline", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_cli_no_args() {
    let output = Command::new("cargo")
        .args(["run", "--package", "sightline", "--quiet"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--help"));
}

#[test]
fn test_cli_help_shows_all_commands() {
    let output = Command::new("cargo")
        .args(["run", "--package", "sightline", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("summary"),
        "Help should show 'summary' command"
    );
    assert!(
        stdout.contains("datasets"),
        "Help should show 'datasets' command"
    );
    assert!(
        stdout.contains("orphans"),
        "Help should show 'orphans' command"
    );
    assert!(
        stdout.contains("impact"),
        "Help should show 'impact' command"
    );
    assert!(stdout.contains("graph"), "Help should show 'graph' command");
}

#[test]
fn test_cli_impact_help() {
    let output = Command::new("cargo")
        .args(["run", "--package", "sightline", "--", "impact", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--name"), "Impact help should show --name");
    assert!(stdout.contains("--arn"), "Impact help should show --arn");
}

// ============================================================================
// Summary Command Tests
// ============================================================================

#[rstest]
fn test_cli_summary(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["summary"]);

    assert!(
        output.status.success(),
        "summary failed: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Workspace Summary"));
    assert!(stdout.contains("Total Dashboards: 2"));
    assert!(stdout.contains("Total Datasets: 3"));
    assert!(stdout.contains("Orphan Datasets: 1"));
}

#[rstest]
fn test_cli_summary_json(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["--json", "summary"]);

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("summary --json should emit valid JSON");
    assert_eq!(parsed["total_dashboards"], 2);
    assert_eq!(parsed["total_datasets"], 3);
    assert_eq!(parsed["orphan_datasets"], 1);
    assert_eq!(parsed["dangling_references"], 0);
}

#[rstest]
fn test_cli_summary_counts_dangling_references(temp_dir: TempDir) {
    write_snapshot(temp_dir.path(), DANGLING_SNAPSHOT);

    let output = run_sightline_in_dir(temp_dir.path(), &["--json", "summary"]);

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["dangling_references"], 1);
}

// ============================================================================
// Datasets Command Tests
// ============================================================================

#[rstest]
fn test_cli_datasets_sorted_with_markers(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["datasets"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 3 dataset(s):"));

    let archive = stdout.find("Archive").expect("Archive should be listed");
    let ledger = stdout.find("Ledger").expect("Ledger should be listed");
    let orders = stdout.find("Orders").expect("Orders should be listed");
    assert!(archive < ledger, "listing should be sorted by name");
    assert!(ledger < orders, "listing should be sorted by name");
}

#[rstest]
fn test_cli_datasets_json(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["--json", "datasets"]);

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().expect("datasets --json should be an array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "Archive");
    assert_eq!(entries[0]["orphan"], true);
    assert_eq!(entries[1]["name"], "Ledger");
    assert_eq!(entries[1]["orphan"], false);
    assert_eq!(entries[2]["arn"], "arn:ds/orders");
}

// ============================================================================
// Orphans Command Tests
// ============================================================================

#[rstest]
fn test_cli_orphans_lists_unreferenced_datasets(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["orphans"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 1 orphan dataset(s):"));
    assert!(stdout.contains("Archive"));
    assert!(!stdout.contains("Orders"), "referenced datasets are not orphans");
}

#[rstest]
fn test_cli_orphans_clean_workspace(temp_dir: TempDir) {
    write_snapshot(temp_dir.path(), CLEAN_SNAPSHOT);

    let output = run_sightline_in_dir(temp_dir.path(), &["orphans"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No orphans found! Your environment is clean."));
}

#[rstest]
fn test_cli_orphans_json(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["--json", "orphans"]);

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let orphans = parsed.as_array().expect("orphans --json should be an array");
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0]["name"], "Archive");
    assert_eq!(orphans[0]["id"], "ds-3");
    assert_eq!(orphans[0]["arn"], "arn:ds/archive");
}

#[rstest]
fn test_cli_orphans_csv_default_path(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["orphans", "--csv"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Orphan report written to orphan_datasets.csv"));

    let report = std::fs::read_to_string(workspace_dir.path().join("orphan_datasets.csv"))
        .expect("report file should exist");
    assert_eq!(report, "name,id\nArchive,ds-3\n");
}

#[rstest]
fn test_cli_orphans_csv_explicit_path(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["orphans", "--csv", "cleanup.csv"]);

    assert!(output.status.success());
    let report = std::fs::read_to_string(workspace_dir.path().join("cleanup.csv"))
        .expect("report file should exist");
    assert!(report.starts_with("name,id\n"));
}

#[rstest]
fn test_cli_orphans_csv_empty_report(temp_dir: TempDir) {
    write_snapshot(temp_dir.path(), CLEAN_SNAPSHOT);

    let output = run_sightline_in_dir(temp_dir.path(), &["orphans", "--csv"]);

    assert!(output.status.success());
    let report = std::fs::read_to_string(temp_dir.path().join("orphan_datasets.csv"))
        .expect("report file should exist");
    assert_eq!(report, "name,id\n", "empty report should be header-only");
}

// ============================================================================
// Impact Command Tests
// ============================================================================

#[rstest]
fn test_cli_impact_by_name_warns(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["impact", "--name", "Orders"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning! Modifying 'Orders' will impact 2 Dashboard(s):"));
    assert!(stdout.contains("Sales Overview"));
    assert!(stdout.contains("Finance"));
}

#[rstest]
fn test_cli_impact_orphan_is_safe(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["impact", "--name", "Archive"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Safe. 'Archive' is not currently used by any Dashboard."));
}

#[rstest]
fn test_cli_impact_unknown_name_fails(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["impact", "--name", "Missing"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no dataset named 'Missing'"));
}

#[rstest]
fn test_cli_impact_by_arn(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["impact", "--arn", "arn:ds/ledger"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning! Modifying 'Ledger' will impact 1 Dashboard(s):"));
    assert!(stdout.contains("Finance"));
}

#[rstest]
fn test_cli_impact_unknown_arn_is_safe(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["impact", "--arn", "arn:ds/nope"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Safe. 'Unknown Dataset' is not currently used by any Dashboard."));
}

#[rstest]
fn test_cli_impact_dangling_arn_reports_usage(temp_dir: TempDir) {
    write_snapshot(temp_dir.path(), DANGLING_SNAPSHOT);

    let output = run_sightline_in_dir(temp_dir.path(), &["impact", "--arn", "arn:ds/ghost"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Warning! Modifying 'Unknown Dataset' will impact 1 Dashboard(s):"),
        "a dangling reference still impacts the dashboard using it: {stdout}"
    );
}

#[rstest]
fn test_cli_impact_json(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(
        workspace_dir.path(),
        &["--json", "impact", "--name", "Orders"],
    );

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["dataset"], "Orders");
    assert_eq!(parsed["arn"], "arn:ds/orders");
    let affected = parsed["affected_dashboards"].as_array().unwrap();
    assert_eq!(affected.len(), 2);
    assert_eq!(affected[0]["id"], "dash-1");
    assert_eq!(affected[1]["id"], "dash-2");
}

// ============================================================================
// Graph Command Tests
// ============================================================================

#[rstest]
fn test_cli_graph_json(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["graph"]);

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("graph should emit valid JSON");

    let nodes = parsed["nodes"].as_array().unwrap();
    let edges = parsed["edges"].as_array().unwrap();
    assert_eq!(nodes.len(), 4, "2 dashboards + 2 referenced datasets");
    assert_eq!(edges.len(), 4, "duplicate references keep their own edges");

    assert_eq!(nodes[0]["label"], "Sales Overview");
    assert_eq!(nodes[0]["kind"], "dashboard");
    assert_eq!(nodes[0]["color"], "#FF9900");
    assert_eq!(nodes[0]["size"], 25);

    let archive_missing = nodes.iter().all(|node| node["label"] != "Archive");
    assert!(archive_missing, "unused datasets never reach the graph");

    assert_eq!(edges[0]["source"], "Orders");
    assert_eq!(edges[0]["target"], "Sales Overview");

    assert_eq!(parsed["config"]["width"], 900);
    assert_eq!(parsed["config"]["height"], 600);
    assert_eq!(parsed["config"]["directed"], true);
}

#[rstest]
fn test_cli_graph_dot(workspace_dir: TempDir) {
    let output = run_sightline_in_dir(workspace_dir.path(), &["graph", "--format", "dot"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("digraph lineage {"));
    assert!(stdout.contains("Sales Overview"));
    assert!(stdout.contains("->"));
    assert!(stdout.contains("#bdc3c7"));
}

// ============================================================================
// Snapshot Loading Tests
// ============================================================================

#[rstest]
fn test_cli_missing_snapshot_fails(temp_dir: TempDir) {
    let output = run_sightline_in_dir(temp_dir.path(), &["summary"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load snapshot from 'qs_snapshot.json'"));
}

#[rstest]
fn test_cli_malformed_snapshot_fails(temp_dir: TempDir) {
    write_snapshot(temp_dir.path(), r#"{"dashboards": []}"#);

    let output = run_sightline_in_dir(temp_dir.path(), &["summary"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load snapshot"));
}

#[rstest]
fn test_cli_snapshot_flag_overrides_default(temp_dir: TempDir) {
    let path = temp_dir.path().join("other.json");
    std::fs::write(&path, CLEAN_SNAPSHOT).unwrap();

    let output = run_sightline_in_dir(
        temp_dir.path(),
        &["--snapshot", "other.json", "--json", "summary"],
    );

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total_datasets"], 1);
}

// ============================================================================
// Output Environment Tests
// ============================================================================

#[rstest]
fn test_cli_no_color_strips_ansi(workspace_dir: TempDir) {
    let output = run_sightline_with_env(
        workspace_dir.path(),
        &["impact", "--name", "Orders"],
        &[("NO_COLOR", "1")],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\x1b["), "NO_COLOR should strip ANSI codes");
}

#[rstest]
fn test_cli_ascii_icons(temp_dir: TempDir) {
    write_snapshot(temp_dir.path(), CLEAN_SNAPSHOT);

    let output = run_sightline_with_env(
        temp_dir.path(),
        &["orphans"],
        &[("SIGHTLINE_ASCII", "1"), ("NO_COLOR", "1")],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("+ No orphans found!"),
        "ASCII mode should replace the check mark: {stdout}"
    );
}
