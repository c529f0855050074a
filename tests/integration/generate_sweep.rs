//! End-to-end sweep generation through the library API.

use super::test_utils::{read_yaml, yaml};
use hlrn_sweep::sweep::{
    discover_axes, EmptySweepPolicy, SweepDocument, SweepGenerator, SweepMarker, SweepOutcome,
    SweepSettings,
};
use hlrn_sweep::{generate_sweep, SweepError};
use serde_yaml::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_two_axes_in_sibling_branches() {
    let temp = TempDir::new().unwrap();
    let doc = yaml("a:\n  _sweep_x: [1, 2]\nb:\n  _sweep_y: [10, 20]\n");
    let files = generate_sweep(&doc, temp.path().join("grid.yaml")).unwrap();
    assert_eq!(files.len(), 4);

    let expected = [(1, 10), (1, 20), (2, 10), (2, 20)];
    for (file, (x, y)) in files.iter().zip(expected) {
        let config = read_yaml(file);
        assert_eq!(
            config,
            yaml(&format!("a:\n  x: {}\nb:\n  y: {}\n", x, y)),
            "unexpected content in {:?}",
            file
        );
    }
}

#[test]
fn test_nested_axis_preserves_nesting() {
    let temp = TempDir::new().unwrap();
    let doc = yaml("a:\n  b:\n    _sweep_z: [foo, bar]\n");
    let files = generate_sweep(&doc, temp.path().join("nested.yaml")).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(read_yaml(&files[0]), yaml("a:\n  b:\n    z: foo\n"));
    assert_eq!(read_yaml(&files[1]), yaml("a:\n  b:\n    z: bar\n"));
}

#[test]
fn test_unswept_values_are_copied_verbatim() {
    let temp = TempDir::new().unwrap();
    let doc = yaml(
        r#"
experiment: resnet
data:
  path: /scratch/imagenet
  augment: [flip, crop]
model:
  depth: 50
  _sweep_width: [64, 128]
trainer:
  _sweep_lr: [0.1, 0.01, 0.001]
  epochs: 90
"#,
    );
    let files = generate_sweep(&doc, temp.path().join("resnet.yaml")).unwrap();
    assert_eq!(files.len(), 6);

    let last = read_yaml(&files[5]);
    assert_eq!(last["experiment"], Value::from("resnet"));
    assert_eq!(last["data"]["augment"], yaml("[flip, crop]"));
    assert_eq!(last["model"]["depth"].as_i64(), Some(50));
    assert_eq!(last["model"]["width"].as_i64(), Some(128));
    assert_eq!(last["trainer"]["lr"].as_f64(), Some(0.001));
    assert!(last["trainer"].get("_sweep_lr").is_none());
}

#[test]
fn test_second_run_returns_same_files_without_rewriting() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("grid.yaml");
    let doc = yaml("_sweep_seed: [1, 2, 3]\n");

    let first = generate_sweep(&doc, &target).unwrap();
    fs::write(&first[0], "seed: 42\n").unwrap();

    let other_doc = yaml("_sweep_seed: [7]\n");
    let generator = SweepGenerator::default();
    let second = generator.generate(&other_doc, &target).unwrap();
    assert!(second.is_resumed());
    assert_eq!(second.files(), first.as_slice());
    assert_eq!(fs::read_to_string(&first[0]).unwrap(), "seed: 42\n");
}

#[test]
fn test_round_trip_recovers_each_combination() {
    let temp = TempDir::new().unwrap();
    let doc = yaml("opt:\n  _sweep_lr: [0.1, 0.2]\n  _sweep_wd: [0, 1, 2]\n_sweep_seed: [5, 6]\n");
    let marker = SweepMarker::default();
    let axes = discover_axes(&SweepDocument::parse(&doc, &marker).unwrap()).flatten();
    let files = generate_sweep(&doc, temp.path().join("rt.yaml")).unwrap();
    assert_eq!(files.len(), 12);

    for (file, combination) in files.iter().zip(axes.combinations()) {
        let config = read_yaml(file);
        for (path, chosen) in combination.choices() {
            let mut node = &config;
            for segment in path.segments() {
                node = &node[segment.as_str()];
            }
            assert_eq!(node, chosen, "axis {} in {:?}", path, file);
        }
    }
}

#[test]
fn test_zero_axes_identity_and_skip() {
    let temp = TempDir::new().unwrap();
    let doc = yaml("model: mlp\nlayers: [64, 64]\n");

    let files = generate_sweep(&doc, temp.path().join("plain.yaml")).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(read_yaml(&files[0]), doc);

    let skip = SweepGenerator::new(SweepSettings {
        on_empty: EmptySweepPolicy::Skip,
        ..SweepSettings::default()
    })
    .unwrap();
    let outcome = skip.generate(&doc, &temp.path().join("skipped.yaml")).unwrap();
    assert_eq!(outcome, SweepOutcome::Generated(Vec::new()));
}

#[test]
fn test_empty_candidate_list_generates_nothing() {
    let temp = TempDir::new().unwrap();
    let doc = yaml("_sweep_a: [1, 2]\n_sweep_b: []\n");
    let files = generate_sweep(&doc, temp.path().join("empty.yaml")).unwrap();
    assert!(files.is_empty());
    assert!(temp.path().join("empty").is_dir());
}

#[test]
fn test_uncreatable_directory_is_fatal() {
    let temp = TempDir::new().unwrap();
    // A regular file where the parent directory should be
    fs::write(temp.path().join("blocker"), "").unwrap();
    let err = generate_sweep(&yaml("_sweep_a: [1]\n"), temp.path().join("blocker/grid.yaml"))
        .unwrap_err();
    assert!(matches!(err, SweepError::CreateOutputDir { .. }));
}

#[test]
fn test_structured_candidates_sweep_whole_subdocuments() {
    let temp = TempDir::new().unwrap();
    let doc = yaml(
        "_sweep_optimizer:\n  - {name: adam, betas: [0.9, 0.999]}\n  - {name: sgd, momentum: 0.9}\n",
    );
    let files = generate_sweep(&doc, temp.path().join("optim.yaml")).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(read_yaml(&files[1]), yaml("optimizer:\n  name: sgd\n  momentum: 0.9\n"));
}
