// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Semantic cross-checking of structured tool reports.
//!
//! One scenario does not have a stable textual golden: its YAML report
//! is instead parsed and every per-package status compared against a
//! ground-truth map recorded by an independent implementation, with a
//! fixed exception set for packages whose outcome legitimately varies.

use crate::cli::RunConfig;
use crate::scenario::{CrossCheck, ScenarioError};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

/// Per-package entry of a tool's YAML report.
#[derive(Clone, Debug, Deserialize)]
pub struct ReportEntry {
    pub package: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct StructuredReport {
    #[serde(default)]
    report: Option<Vec<ReportEntry>>,
}

/// Ground-truth verdict for one package.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpectedStatus {
    Ok,
    Fail,
}

impl ExpectedStatus {
    fn as_str(self) -> &'static str {
        match self {
            ExpectedStatus::Ok => "OK",
            ExpectedStatus::Fail => "FAIL",
        }
    }
}

/// Run one cross-check scenario to completion.
///
/// Unlike golden scenarios the tool's stdout is piped and held in
/// memory; there is no capture file and nothing to clean up.
pub fn run_cross_check(check: &CrossCheck, config: &RunConfig) -> Result<(), ScenarioError> {
    let Some((program, args)) = check.command.split_first() else {
        return Err(ScenarioError::EmptyCommand { name: check.name });
    };

    let command_line = check.command_line();
    if config.verbosity >= 2 {
        println!("{command_line}");
    }

    let output = Command::new(program)
        .args(args)
        .current_dir(&config.root)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| ScenarioError::Launch {
            program: program.clone(),
            source,
        })?;

    if config.debug {
        eprintln!(
            "[debug] {}: child exited with {}, {} bytes of report",
            check.name,
            output.status,
            output.stdout.len()
        );
    }

    let entries = parse_report(&output.stdout, &command_line)?;
    let truth = load_ground_truth(&check.ground_truth)?;
    check_entries(&entries, &truth, check.exceptions, &check.ground_truth)
}

/// Parse the report body out of captured stdout. An empty stream or a
/// report with no entries is vacuously valid.
fn parse_report(stdout: &[u8], command_line: &str) -> Result<Vec<ReportEntry>, ScenarioError> {
    let text = String::from_utf8_lossy(stdout);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let report: StructuredReport =
        serde_yaml::from_str(&text).map_err(|source| ScenarioError::Report {
            command_line: command_line.to_string(),
            source,
        })?;
    Ok(report.report.unwrap_or_default())
}

/// Load the `package status` map, one whitespace-delimited pair per
/// line; blank lines are skipped, anything else malformed is an error.
pub(crate) fn load_ground_truth(
    path: &Path,
) -> Result<BTreeMap<String, ExpectedStatus>, ScenarioError> {
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::GroundTruthIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut truth = BTreeMap::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let entry = match (fields.next(), fields.next(), fields.next()) {
            (Some(package), Some("OK"), None) => (package.to_string(), ExpectedStatus::Ok),
            (Some(package), Some("FAIL"), None) => (package.to_string(), ExpectedStatus::Fail),
            _ => {
                return Err(ScenarioError::GroundTruthFormat {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    content: raw_line.to_string(),
                })
            }
        };
        truth.insert(entry.0, entry.1);
    }
    Ok(truth)
}

/// Compare every reported entry against the ground truth.
///
/// A reported status of `ok` must map to `OK` and anything else to
/// `FAIL`; membership in the exception set waives both the status
/// comparison and the lookup-miss check for that package.
pub(crate) fn check_entries(
    entries: &[ReportEntry],
    truth: &BTreeMap<String, ExpectedStatus>,
    exceptions: &[&str],
    ground_truth_path: &Path,
) -> Result<(), ScenarioError> {
    let exempt: BTreeSet<&str> = exceptions.iter().copied().collect();

    for entry in entries {
        let package = normalize_package_id(&entry.package);
        if exempt.contains(package.as_str()) {
            continue;
        }

        let expected = truth
            .get(&package)
            .ok_or_else(|| ScenarioError::UnknownPackage {
                package: package.clone(),
                path: ground_truth_path.to_path_buf(),
            })?;

        let reported_ok = entry.status == "ok";
        let expected_ok = *expected == ExpectedStatus::Ok;
        if reported_ok != expected_ok {
            return Err(ScenarioError::StatusMismatch {
                package,
                reported: entry.status.clone(),
                expected: expected.as_str(),
            });
        }
    }
    Ok(())
}

/// Report identifiers arrive CUDF-encoded and may carry an architecture
/// suffix (`name:amd64`). Ground-truth keys are the decoded base name:
/// everything from the last `:` is stripped, then `%XX` escapes are
/// decoded.
pub(crate) fn normalize_package_id(raw: &str) -> String {
    let base = match raw.rsplit_once(':') {
        Some((name, _arch)) => name,
        None => raw,
    };
    percent_decode(base)
}

/// Decode `%XX` escapes; malformed escapes pass through verbatim.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
#[path = "semantic_tests.rs"]
mod tests;
