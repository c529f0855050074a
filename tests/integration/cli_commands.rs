//! CLI tests driving the hlrn-sweep binary.

use super::test_utils::{read_yaml, run_cli, stdout_lines, write_input, yaml};
use tempfile::TempDir;

#[test]
fn test_generate_prints_written_files() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "grid.yaml", "a:\n  _sweep_x: [1, 2]\nb:\n  _sweep_y: [10, 20]\n");

    let output = run_cli(temp.path(), &["generate", "grid.yaml"]);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("sweep_0.yaml"), "got {:?}", lines);
    assert!(lines[3].ends_with("sweep_3.yaml"), "got {:?}", lines);

    let dir = temp.path().join("grid");
    assert_eq!(read_yaml(&dir.join("sweep_1.yaml")), yaml("a:\n  x: 1\nb:\n  y: 20\n"));
}

#[test]
fn test_generate_twice_resumes() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "grid.yaml", "_sweep_seed: [1, 2]\n");

    let first = stdout_lines(&run_cli(temp.path(), &["generate", "grid.yaml"]));
    let output = run_cli(
        temp.path(),
        &["--log-level", "warn", "generate", "grid.yaml", "--format", "json"],
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "resumed");
    let files: Vec<String> = json["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f.as_str().unwrap().to_string())
        .collect();
    assert_eq!(files, first);
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("already exists"),
        "resume should be logged on stderr"
    );
}

#[test]
fn test_generate_with_target_and_workspace_config() {
    let temp = TempDir::new().unwrap();
    write_input(
        temp.path(),
        "hlrn-sweep.toml",
        "[sweep]\nmarker = \"sweep__\"\nextension = \"yml\"\nfile_prefix = \"job_\"\n",
    );
    write_input(temp.path(), "configs/base.yaml", "sweep__lr: [0.1, 0.2]\n");

    let output = run_cli(
        temp.path(),
        &["generate", "configs/base.yaml", "--target", "runs/lr.yaml"],
    );
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    let first = temp.path().join("runs/lr/job_0.yml");
    assert!(first.exists());
    assert_eq!(read_yaml(&first), yaml("lr: 0.1\n"));
}

#[test]
fn test_plan_json_reports_counts_without_writing() {
    let temp = TempDir::new().unwrap();
    write_input(
        temp.path(),
        "grid.yaml",
        "model:\n  _sweep_depth: [2, 4, 8]\n_sweep_seed: [1, 2]\n",
    );

    let output = run_cli(temp.path(), &["plan", "grid.yaml", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["combinations"], 6);
    assert_eq!(json["outputs"], 6);
    assert_eq!(json["axes"][0]["path"], "model.depth");
    assert_eq!(json["axes"][1]["marker_key"], "_sweep_seed");
    assert!(!temp.path().join("grid").exists());
}

#[test]
fn test_plan_text_table() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "grid.yaml", "_sweep_act: [relu, gelu]\n");

    let output = run_cli(temp.path(), &["plan", "grid.yaml"]);
    let text = stdout_lines(&output).join("\n");
    assert!(text.contains("Sweep axes (1)"));
    assert!(text.contains("relu, gelu"));
    assert!(text.contains("Configs to generate: 2"));
}

#[test]
fn test_malformed_document_fails_with_message() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "bad.yaml", "train:\n  _sweep_lr: 0.1\n");

    let output = run_cli(temp.path(), &["--quiet", "generate", "bad.yaml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("train._sweep_lr"), "stderr={}", stderr);
    assert!(!temp.path().join("bad").exists());
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(temp.path(), &["--quiet", "plan", "missing.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read input"));
}

#[test]
fn test_generate_input_without_extension_fails() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "grid", "_sweep_seed: [1, 2]\n");

    let output = run_cli(temp.path(), &["--quiet", "generate", "grid"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("has no extension"), "stderr={}", stderr);
    assert!(temp.path().join("grid").is_file());
}
