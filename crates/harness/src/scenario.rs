// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Scenario data model and the scenario-local error taxonomy.

use distharness_golden::{CaptureError, CompareError};
use std::path::PathBuf;
use thiserror::Error;

/// A tool invocation bound to its recorded golden output.
///
/// Scenarios are built once by the registry and never mutated; each is
/// consumed exactly once per run.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Short identifier used in run reports
    pub name: &'static str,
    /// Full invocation: tool path followed by its arguments
    pub command: Vec<String>,
    /// Golden file the captured stdout must match exactly
    pub expected_artifact: PathBuf,
}

impl Scenario {
    /// Shell-quoted reproduction line for reports and verbose output.
    pub fn command_line(&self) -> String {
        format_command_line(&self.command)
    }
}

/// A tool invocation whose YAML report is cross-checked semantically
/// instead of textually.
#[derive(Clone, Debug)]
pub struct CrossCheck {
    /// Short identifier used in run reports
    pub name: &'static str,
    /// Full invocation: tool path followed by its arguments
    pub command: Vec<String>,
    /// Ground-truth status map, one `package status` pair per line
    pub ground_truth: PathBuf,
    /// Packages whose status may diverge without failing the run
    pub exceptions: &'static [&'static str],
}

impl CrossCheck {
    /// Shell-quoted reproduction line for reports and verbose output.
    pub fn command_line(&self) -> String {
        format_command_line(&self.command)
    }
}

/// Why a single scenario failed.
///
/// Every variant is scenario-local: the entry point records it and moves
/// on to the next scenario, never aborting the run.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario {name} has an empty command vector")]
    EmptyCommand { name: &'static str },

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Artifact(#[from] CompareError),

    #[error("captured output differs from {}\n  reproduce: {command_line}", .expected.display())]
    GoldenMismatch {
        command_line: String,
        expected: PathBuf,
        diff: String,
    },

    #[error("failed to parse report from `{command_line}`: {source}")]
    Report {
        command_line: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read ground truth {}: {source}", .path.display())]
    GroundTruthIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ground truth {} line {line} is malformed: {content:?}", .path.display())]
    GroundTruthFormat {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("package {package} reported {reported:?} but ground truth says {expected}")]
    StatusMismatch {
        package: String,
        reported: String,
        expected: &'static str,
    },

    #[error("package {package} is missing from ground truth {}", .path.display())]
    UnknownPackage { package: String, path: PathBuf },
}

/// Join a command vector into a copy-pasteable shell line.
fn format_command_line(command: &[String]) -> String {
    command
        .iter()
        .map(|arg| shell_quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    let safe = arg.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | '/' | ':' | '@' | '+' | '=')
    });
    if safe {
        return arg.to_string();
    }
    let escaped = arg.replace('\'', "'\"'\"'");
    format!("'{escaped}'")
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
