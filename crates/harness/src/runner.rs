// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Golden scenario execution: spawn, capture, compare, clean up.

use crate::cli::RunConfig;
use crate::scenario::{Scenario, ScenarioError};
use distharness_golden::{compare, CaptureFile};
use std::process::{Command, Stdio};

/// Run one golden scenario to completion.
///
/// The tool's stdout is redirected into a freshly named capture file,
/// the call blocks until the child terminates, and the capture is then
/// compared against the scenario's golden artifact. The capture file is
/// removed on every exit path, pass or fail. Stderr is inherited and
/// never asserted on, and the child's exit status takes no part in the
/// verdict; only captured stdout does.
pub fn run_golden(scenario: &Scenario, config: &RunConfig) -> Result<(), ScenarioError> {
    let Some((program, args)) = scenario.command.split_first() else {
        return Err(ScenarioError::EmptyCommand {
            name: scenario.name,
        });
    };

    let command_line = scenario.command_line();
    if config.verbosity >= 2 {
        println!("{command_line}");
    }

    let capture = CaptureFile::create(&config.scratch_dir)?;
    let stdout = capture.open_for_write()?;

    let status = Command::new(program)
        .args(args)
        .current_dir(&config.root)
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ScenarioError::Launch {
            program: program.clone(),
            source,
        })?;

    if config.debug {
        eprintln!(
            "[debug] {}: child exited with {status}, capture at {}",
            scenario.name,
            capture.path().display()
        );
    }

    let comparison = compare(capture.path(), &scenario.expected_artifact)?;
    if !comparison.is_equal() {
        if config.verbosity >= 2 {
            eprint!("{}", comparison.unified_diff());
        }
        return Err(ScenarioError::GoldenMismatch {
            command_line,
            expected: scenario.expected_artifact.clone(),
            diff: comparison.unified_diff().to_string(),
        });
    }

    Ok(())
}
