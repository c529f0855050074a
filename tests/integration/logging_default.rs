//! Integration tests for logging destinations.
//!
//! Stdout carries command output only; logs go to stderr by default or to a file
//! when configured.

use super::test_utils::{run_cli, stdout_lines, write_input};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_verbose_logs_go_to_stderr_not_stdout() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "grid.yaml", "_sweep_seed: [1, 2]\n");

    let output = run_cli(temp.path(), &["--verbose", "generate", "grid.yaml"]);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2, "stdout should hold only file paths: {:?}", lines);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Wrote sweep config"), "stderr={}", stderr);
}

#[test]
fn test_file_output_writes_log_file_in_workspace() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "grid.yaml", "_sweep_seed: [1]\n");

    let output = run_cli(
        temp.path(),
        &[
            "--log-level",
            "debug",
            "--log-output",
            "file",
            "--log-format",
            "json",
            "generate",
            "grid.yaml",
        ],
    );
    assert_eq!(stdout_lines(&output).len(), 1);

    let log = fs::read_to_string(temp.path().join("hlrn-sweep.log")).unwrap();
    let first_line = log.lines().next().expect("log file should not be empty");
    let entry: serde_json::Value = serde_json::from_str(first_line).unwrap();
    assert!(entry.get("timestamp").is_some());
    assert!(log.contains("Generated sweep configs"));
}

#[test]
fn test_quiet_produces_no_log_output() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "grid.yaml", "_sweep_seed: [1]\n");
    let grid = temp.path().join("grid");
    fs::create_dir(&grid).unwrap();

    let output = run_cli(temp.path(), &["--quiet", "generate", "grid.yaml"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
