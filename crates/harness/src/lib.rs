// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Golden-master harness for the package dependency-analysis tools.
//!
//! The harness runs each tool of the family (`distcheck`, `outdated`,
//! `ceve`, `deb-buildcheck`, `apt-cudf`) with a fixed argument vector
//! against fixture package repositories, captures its stdout, and
//! verifies the capture against a recorded golden reference. Most
//! scenarios compare byte-for-byte via a unified diff; one scenario
//! cross-checks the tool's YAML report against an independently
//! recorded ground-truth status map.

pub mod cli;
pub mod output_diagnostic;
pub mod registry;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod semantic;
