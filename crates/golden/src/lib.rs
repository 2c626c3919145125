// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Golden-output comparison and capture primitives for distharness.
//!
//! This crate provides the two building blocks every harness scenario
//! rests on: uniquely named capture files for redirected tool output,
//! and exact line-level comparison against recorded golden files.

mod capture;
mod diff;

pub use capture::{CaptureError, CaptureFile};
pub use diff::{compare, CompareError, Comparison};
