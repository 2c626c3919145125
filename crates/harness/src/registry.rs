// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! The enumerated scenario table.
//!
//! Declarative configuration only: each row binds one tool invocation to
//! its recorded golden artifact (or ground-truth map). All paths are
//! relative to the run root, which is also the directory the tools are
//! launched from.

use crate::scenario::{CrossCheck, Scenario};
use std::path::Path;

/// Packages whose semantic status is allowed to diverge from the
/// recorded ground truth. Their installability flips with the solver
/// revision shipped alongside the tools, so neither outcome is wrong.
pub const KNOWN_DIVERGENT: &[&str] = &["whizzytex", "libgd2-noxpm-dev"];

const SID: &str = "deb://fixtures/DebianPackages/sid.packages.bz2";
const SID_PLAIN: &str = "fixtures/DebianPackages/sid.packages.bz2";
const LENNY: &str = "deb://fixtures/DebianPackages/lenny.packages.bz2";
const SID_SOURCES: &str = "fixtures/DebianPackages/sid.sources.bz2";
const SID_STATUS: &str = "fixtures/DebianPackages/sid.status";

/// The full golden scenario set, in execution order.
pub fn golden_scenarios(root: &Path) -> Vec<Scenario> {
    vec![
        scenario(
            root,
            "distcheck_failure",
            &["./distcheck", "-f", "-e", SID],
            "distcheck_failure",
        ),
        scenario(
            root,
            "distcheck_success",
            &["./distcheck", "-s", LENNY],
            "distcheck_success",
        ),
        // essential packages considered, everything printed
        scenario(
            root,
            "distcheck_checkonly",
            &["./distcheck", "--checkonly", "3dchess", SID, "-s", "-e"],
            "distcheck_checkonly",
        ),
        // essential packages considered, only the 3dchess code printed
        scenario(
            root,
            "distcheck_checkonly_minimal",
            &["./distcheck", "-m", "--checkonly", "3dchess", SID, "-s", "-e"],
            "distcheck_checkonly_minimal",
        ),
        // without essential packages the result is semantically the same
        // as distcheck_checkonly_minimal but syntactically different
        scenario(
            root,
            "distcheck_checkonly_ignore_essential",
            &[
                "./distcheck",
                "--deb-ignore-essential",
                "--checkonly",
                "3dchess",
                SID,
                "-s",
                "-e",
            ],
            "distcheck_checkonly_ignore_essential",
        ),
        scenario(
            root,
            "distcheck_checkonly_multiarch",
            &[
                "./distcheck",
                "--checkonly",
                "3dchess:amd64",
                SID,
                "-s",
                "-e",
                "--deb-native-arch",
                "amd64",
            ],
            "distcheck_checkonly_multiarch",
        ),
        scenario(
            root,
            "distcheck_ignore_essential",
            &["./distcheck", "--deb-ignore-essential", "-f", "-e", SID],
            "distcheck_ignore_essential",
        ),
        scenario(
            root,
            "outdated_failure",
            &["./outdated", "-f", "-e", SID_PLAIN],
            "outdated_failure",
        ),
        scenario(root, "ceve_cnf", &["./ceve", "-t", "cnf", SID], "ceve_cnf"),
        scenario(
            root,
            "ceve_cone_dot",
            &["./ceve", "-t", "dot", "-c", "3dchess", SID],
            "ceve_cone_dot",
        ),
        scenario(
            root,
            "ceve_cone_multiarch_dot",
            &[
                "./ceve",
                "-t",
                "dot",
                "-c",
                "3dchess:amd64",
                "--deb-native-arch",
                "amd64",
                SID,
            ],
            "ceve_cone_multiarch_dot",
        ),
        scenario(
            root,
            "buildcheck_failure",
            &[
                "./deb-buildcheck",
                "--deb-native-arch",
                "amd64",
                "-f",
                "-e",
                SID,
                SID_SOURCES,
            ],
            "buildcheck_failure",
        ),
        scenario(
            root,
            "apt_cudf_trivial",
            &[
                "./apt-cudf",
                "--conf",
                "fixtures/aptcudf/apt-cudf.conf",
                "--solver",
                "internal",
                "fixtures/aptcudf/trivial.edsp",
            ],
            "apt_cudf_trivial",
        ),
    ]
}

/// Scenarios validated semantically against a ground-truth status map.
pub fn cross_checks(root: &Path) -> Vec<CrossCheck> {
    vec![CrossCheck {
        name: "distcheck_cross_report",
        command: to_command(&["./distcheck", "-e", "-f", SID]),
        ground_truth: root.join(SID_STATUS),
        exceptions: KNOWN_DIVERGENT,
    }]
}

fn scenario(root: &Path, name: &'static str, command: &[&str], artifact: &str) -> Scenario {
    Scenario {
        name,
        command: to_command(command),
        expected_artifact: root.join("fixtures/golden").join(artifact),
    }
}

fn to_command(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_string()).collect()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
