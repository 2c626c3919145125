// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Process-level tests for the golden scenario runner, driven by
//! synthetic tools built from `/bin/sh`.

use std::fs;
use std::path::{Path, PathBuf};

use distharness::cli::RunConfig;
use distharness::runner::run_golden;
use distharness::scenario::{Scenario, ScenarioError};

fn sh(script: &str) -> Vec<String> {
    vec!["/bin/sh".to_string(), "-c".to_string(), script.to_string()]
}

fn scenario(root: &Path, command: Vec<String>, golden: &str) -> Scenario {
    Scenario {
        name: "synthetic",
        command,
        expected_artifact: root.join(golden),
    }
}

fn scratch_entries(config: &RunConfig) -> Vec<PathBuf> {
    match fs::read_dir(&config.scratch_dir) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn matching_stdout_passes_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("expected_1"), "alpha\nbeta\n").unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    let scenario = scenario(root.path(), sh("printf 'alpha\\nbeta\\n'"), "expected_1");
    run_golden(&scenario, &config).unwrap();

    assert!(scratch_entries(&config).is_empty());
}

#[test]
fn changed_line_fails_with_a_context_diff() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("expected_1"), "alpha\nbeta\ngamma\n").unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    let scenario = scenario(
        root.path(),
        sh("printf 'alpha\\nBETA\\ngamma\\n'"),
        "expected_1",
    );
    let err = run_golden(&scenario, &config).unwrap_err();

    match err {
        ScenarioError::GoldenMismatch { diff, .. } => {
            assert!(diff.contains("-BETA"));
            assert!(diff.contains("+beta"));
            assert!(diff.contains(" alpha"), "context line missing:\n{diff}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(scratch_entries(&config).is_empty());
}

#[test]
fn missing_golden_artifact_is_an_artifact_error() {
    let root = tempfile::tempdir().unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    let scenario = scenario(root.path(), sh("printf 'alpha\\n'"), "never_recorded");
    let err = run_golden(&scenario, &config).unwrap_err();

    assert!(matches!(err, ScenarioError::Artifact(_)));
    assert!(err.to_string().contains("never_recorded"));
    assert!(scratch_entries(&config).is_empty());
}

#[test]
fn unknown_executable_is_a_launch_error() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("expected_1"), "alpha\n").unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    let scenario = scenario(
        root.path(),
        vec!["./no-such-tool".to_string(), "-f".to_string()],
        "expected_1",
    );
    let err = run_golden(&scenario, &config).unwrap_err();

    match err {
        ScenarioError::Launch { program, .. } => assert_eq!(program, "./no-such-tool"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(scratch_entries(&config).is_empty());
}

#[test]
fn exit_status_takes_no_part_in_the_verdict() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("expected_1"), "alpha\n").unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    let scenario = scenario(
        root.path(),
        sh("printf 'alpha\\n'; exit 3"),
        "expected_1",
    );

    run_golden(&scenario, &config).unwrap();
}

#[test]
fn commands_run_from_the_configured_root() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("repo.data"), "packages: 3\n").unwrap();
    fs::write(root.path().join("expected_1"), "packages: 3\n").unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    // relative path only resolves if the child runs from the root
    let scenario = scenario(root.path(), sh("cat repo.data"), "expected_1");

    run_golden(&scenario, &config).unwrap();
}

#[test]
fn stderr_is_not_captured_into_the_comparison() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("expected_1"), "alpha\n").unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    let scenario = scenario(
        root.path(),
        sh("printf 'alpha\\n'; echo noise >&2"),
        "expected_1",
    );

    run_golden(&scenario, &config).unwrap();
}

#[test]
fn empty_command_vector_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let config = RunConfig::rooted_at(root.path().to_path_buf());

    let scenario = scenario(root.path(), Vec::new(), "expected_1");
    let err = run_golden(&scenario, &config).unwrap_err();

    assert!(matches!(err, ScenarioError::EmptyCommand { .. }));
}
