// snp-tabulator/tests/cli_test.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const EXAMPLE: &str = "Primers\tr1311895\tr1406821\tr145504\tr17661\tr2493899\r\n\
MB128\tA\tC\tG\tCA\tC\r\n\
MB140\tA\tC\tG\tC\tC\r\n\
MB155\tA\tC\tG\tC\tC\r\n\
MB164\tAG\tC\tG\t\tC";

// Helper function to write an input table into the test directory
fn create_table_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content.as_bytes()).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snp-tabulator"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_converts_example_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = create_table_file(dir.path(), "genotypes.txt", EXAMPLE);

    let output = run(&["--in", input.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed with: {output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "SNPMarkers\tr1311895-A\tr1311895-B\tr1406821-A\tr1406821-B\tr145504-A\tr145504-B\
         \tr17661-A\tr17661-B\tr2493899-A\tr2493899-B"
    );
    assert_eq!(lines[1], "MB128\tA\tA\tC\tC\tG\tG\tC\tA\tC\tC");
    assert_eq!(lines[4], "MB164\tA\tG\tC\tC\tG\tG\t0\t0\tC\tC");
}

#[test]
fn test_missing_input_flag_prints_usage() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--in"), "unexpected stderr: {stderr}");
}

#[test]
fn test_unreadable_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");

    let output = run(&["--in", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_genotype_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = create_table_file(
        dir.path(),
        "bad.txt",
        "Primers\tr1\tr2\r\nS1\tA\tC\r\nS2\tA\tCAT\r\nS3\tG\tG",
    );

    let output = run(&["--in", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("S2"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("column 2"), "unexpected stderr: {stderr}");
}

#[test]
fn test_failed_conversion_creates_no_output_file() {
    let dir = TempDir::new().unwrap();
    let input = create_table_file(dir.path(), "bad.txt", "Primers\tr1\r\nS1\tAGT");
    let target = dir.path().join("wide.txt");

    let output = run(&[
        "--in",
        input.to_str().unwrap(),
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(!target.exists());
}

#[test]
fn test_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = create_table_file(dir.path(), "genotypes.txt", EXAMPLE);
    let target = dir.path().join("wide.txt");

    let output = run(&[
        "--in",
        input.to_str().unwrap(),
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed with: {output:?}");
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&target).unwrap();
    assert_eq!(written.lines().count(), 5);
}

#[test]
fn test_normalize_line_endings_flag() {
    let dir = TempDir::new().unwrap();
    let input = create_table_file(dir.path(), "lf.txt", "Primers\tr1\nS1\tCA\nS2\t\n");

    let output = run(&[
        "--in",
        input.to_str().unwrap(),
        "--normalize-line-endings",
    ]);
    assert!(output.status.success(), "Command failed with: {output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "SNPMarkers\tr1-A\tr1-B\nS1\tC\tA\nS2\t0\t0\n"
    );
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    let input = create_table_file(dir.path(), "genotypes.txt", EXAMPLE);

    let output = run(&["--in", input.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success(), "Command failed with: {output:?}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["samples"].as_array().unwrap().len(), 4);
    assert_eq!(value["samples"][3]["sample"], "MB164");
}
