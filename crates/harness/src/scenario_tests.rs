// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

fn scenario_with(command: &[&str]) -> Scenario {
    Scenario {
        name: "sample",
        command: command.iter().map(|s| s.to_string()).collect(),
        expected_artifact: PathBuf::from("fixtures/golden/sample"),
    }
}

#[test]
fn command_line_joins_plain_arguments() {
    let scenario = scenario_with(&["./distcheck", "-f", "-e", "deb://fixtures/sid.packages.bz2"]);

    assert_eq!(
        scenario.command_line(),
        "./distcheck -f -e deb://fixtures/sid.packages.bz2"
    );
}

#[rstest]
#[case(&["tool", "two words"], "tool 'two words'")]
#[case(&["tool", ""], "tool ''")]
#[case(&["tool", "it's"], r#"tool 'it'"'"'s'"#)]
fn command_line_quotes_awkward_arguments(#[case] command: &[&str], #[case] rendered: &str) {
    let scenario = scenario_with(command);

    assert_eq!(scenario.command_line(), rendered);
}

#[test]
fn golden_mismatch_message_names_artifact_and_command() {
    let error = ScenarioError::GoldenMismatch {
        command_line: "./distcheck -f".to_string(),
        expected: PathBuf::from("fixtures/golden/distcheck_failure"),
        diff: String::new(),
    };

    let message = error.to_string();
    assert!(message.contains("fixtures/golden/distcheck_failure"));
    assert!(message.contains("./distcheck -f"));
}

#[test]
fn unknown_package_message_names_both_sides() {
    let error = ScenarioError::UnknownPackage {
        package: "3dchess".to_string(),
        path: PathBuf::from("fixtures/DebianPackages/sid.status"),
    };

    let message = error.to_string();
    assert!(message.contains("3dchess"));
    assert!(message.contains("sid.status"));
}
