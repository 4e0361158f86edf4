//! Integration tests for the command-line workflows.
//!
//! These tests drive the compiled binary end to end using a temporary
//! home directory, so config and log files never touch the real
//! `~/.geocell`:
//! - cover from pasted coordinates to a CSV output file
//! - cells from a geohash list file
//! - encode/decode round trips
//! - config set/get persistence
//!
//! Run with: `cargo test --test cli_workflow`

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the CLI with an isolated home directory and capture output.
fn run_cli(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_geocell"))
        .env("HOME", home.path())
        .args(args)
        .output()
        .expect("Failed to execute CLI command")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_encode_prints_known_geohash() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        &home,
        &["encode", "--lat", "42.6", "--lon", "-5.6", "--precision", "5"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "ezs42");
}

#[test]
fn test_decode_accepts_uppercase() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&home, &["decode", "EZS42"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let text = stdout_of(&output);
    assert!(text.contains("ezs42"), "unexpected output: {}", text);
    assert!(text.contains("Precision: 5"));
}

#[test]
fn test_cover_writes_csv_output_file() {
    let home = TempDir::new().unwrap();
    let out_path = home.path().join("cells.csv");
    let output = run_cli(
        &home,
        &[
            "cover",
            "--coords",
            "-6.17,106.82, -6.17,106.83, -6.18,106.83, -6.18,106.82",
            "--policy",
            "outer",
            "--precision",
            "6",
            "--format",
            "csv",
            "--output",
            out_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Covered area with"));

    let content = fs::read_to_string(&out_path).expect("output file should exist");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("geohash,geometry"));
    assert!(lines.count() > 0, "coverage should produce rows");
}

#[test]
fn test_cover_requires_exactly_one_input() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&home, &["cover", "--policy", "outer"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Invalid input"));
}

#[test]
fn test_cover_respects_cell_ceiling() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        &home,
        &[
            "cover",
            "--coords",
            "0,0, 0,1, 1,1, 1,0",
            "--policy",
            "outer",
            "--precision",
            "9",
            "--max-cells",
            "10",
        ],
    );
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("exceeding the maximum"));
}

#[test]
fn test_cells_reads_list_file_and_writes_geojson() {
    let home = TempDir::new().unwrap();
    let list_path = home.path().join("hashes.txt");
    fs::write(&list_path, "QQGUYU7, qqguyur ;; a1b2").unwrap();

    let out_path = home.path().join("cells.geojson");
    let output = run_cli(
        &home,
        &[
            "cells",
            "--input",
            list_path.to_str().unwrap(),
            "--format",
            "geojson",
            "--output",
            out_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("2 valid geohashes"));

    let content = fs::read_to_string(&out_path).expect("output file should exist");
    assert!(content.contains("FeatureCollection"));
    assert!(content.contains("qqguyu7"));
    assert!(content.contains("qqguyur"));
}

#[test]
fn test_cells_rejects_input_with_no_valid_geohashes() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&home, &["cells", "a1!! oil"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("no valid geohashes"));
}

#[test]
fn test_coords_extracts_named_rows() {
    let home = TempDir::new().unwrap();
    let in_path = home.path().join("area.geojson");
    fs::write(
        &in_path,
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"area":"north"},
             "geometry":{"type":"Point","coordinates":[106.8,-6.2]}}
        ]}"#,
    )
    .unwrap();

    let output = run_cli(
        &home,
        &[
            "coords",
            "--input",
            in_path.to_str().unwrap(),
            "--name-property",
            "area",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let text = stdout_of(&output);
    assert!(text.contains("name,coordinates"));
    assert!(text.contains("north"));
}

#[test]
fn test_config_set_and_get_roundtrip() {
    let home = TempDir::new().unwrap();

    let set = run_cli(&home, &["config", "set", "coverage.default_precision", "8"]);
    assert!(set.status.success(), "stderr: {}", stderr_of(&set));

    let get = run_cli(&home, &["config", "get", "coverage.default_precision"]);
    assert!(get.status.success());
    assert_eq!(stdout_of(&get).trim(), "8");

    // The encode default now comes from the persisted config
    let encoded = run_cli(&home, &["encode", "--lat", "42.6", "--lon", "-5.6"]);
    assert!(encoded.status.success());
    assert_eq!(stdout_of(&encoded).trim().len(), 8);
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&home, &["config", "get", "coverage.policy"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Unknown configuration key"));
}
