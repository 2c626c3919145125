// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Exact comparison of captured output against golden files.

use chrono::{DateTime, Local};
use similar::TextDiff;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while materializing a comparison
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of comparing a captured file against its golden reference.
///
/// The rendered diff is diagnostic only; the equality verdict depends on
/// file content alone.
#[derive(Clone, Debug)]
pub struct Comparison {
    equal: bool,
    unified_diff: String,
}

impl Comparison {
    /// Whether both files matched exactly
    pub fn is_equal(&self) -> bool {
        self.equal
    }

    /// Unified diff between the two files; empty on an exact match
    pub fn unified_diff(&self) -> &str {
        &self.unified_diff
    }
}

/// Compare two files line by line.
///
/// Equality is exact: trailing-newline and whitespace differences count.
/// On mismatch the unified diff carries three context lines around each
/// hunk and each file's modification time in its header.
pub fn compare(actual: &Path, expected: &Path) -> Result<Comparison, CompareError> {
    let actual_text = read(actual)?;
    let expected_text = read(expected)?;

    if actual_text == expected_text {
        return Ok(Comparison {
            equal: true,
            unified_diff: String::new(),
        });
    }

    let diff = TextDiff::from_lines(&actual_text, &expected_text);
    let unified_diff = diff
        .unified_diff()
        .context_radius(3)
        .header(&header_label(actual), &header_label(expected))
        .to_string();

    Ok(Comparison {
        equal: false,
        unified_diff,
    })
}

fn read(path: &Path) -> Result<String, CompareError> {
    fs::read_to_string(path).map_err(|source| CompareError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Diff header line for one side: the path plus its mtime when available.
fn header_label(path: &Path) -> String {
    let mtime = fs::metadata(path).and_then(|meta| meta.modified()).ok();
    match mtime {
        Some(mtime) => {
            let stamp = DateTime::<Local>::from(mtime).format("%a %b %e %H:%M:%S %Y");
            format!("{} ({})", path.display(), stamp)
        }
        None => path.display().to_string(),
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
