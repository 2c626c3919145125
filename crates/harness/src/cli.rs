// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! CLI argument parsing for the harness runner.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Golden-master harness for the dependency-analysis tool family
#[derive(Parser, Debug)]
#[command(
    name = "distharness",
    version,
    about = "Run the dependency-analysis tools against recorded golden outputs"
)]
pub struct Cli {
    /// Increase verbosity (-v per-scenario results, -vv command lines and diffs)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Print child exit statuses and capture file locations
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Root directory holding the tools and the fixture tree
    #[arg(long = "pwd", value_name = "DIR", env = "DISTHARNESS_ROOT")]
    pub pwd: Option<PathBuf>,
}

/// Execution settings threaded through every scenario run.
///
/// Verbosity travels here as a plain value rather than process-wide
/// state, so library callers can run scenarios under settings of their
/// own choosing.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Directory the tools run from; fixture paths are relative to it
    pub root: PathBuf,
    /// Where capture files are placed
    pub scratch_dir: PathBuf,
    /// 0 = summary only, 1 = per-scenario lines, 2 = command lines and diffs
    pub verbosity: u8,
    /// Surface child exit statuses and capture paths on stderr
    pub debug: bool,
}

impl RunConfig {
    /// Build a config rooted at `root` with the conventional scratch
    /// directory `<root>/tmp`.
    pub fn rooted_at(root: PathBuf) -> Self {
        Self {
            scratch_dir: root.join("tmp"),
            root,
            verbosity: 0,
            debug: false,
        }
    }
}

impl Cli {
    /// Resolve the parsed arguments into a run configuration.
    pub fn run_config(&self) -> RunConfig {
        let root = self.pwd.clone().unwrap_or_else(|| PathBuf::from("."));
        RunConfig {
            scratch_dir: root.join("tmp"),
            root,
            verbosity: self.verbose,
            debug: self.debug,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
