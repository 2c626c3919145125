// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Uniquely named capture files with scoped cleanup.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while setting up a capture file
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to create scratch directory {path}: {source}")]
    Scratch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create capture file {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A uniquely named file receiving one command's captured stdout.
///
/// The file name embeds a freshly generated UUID, so captures sharing a
/// scratch directory cannot collide even if scenarios ever run in
/// parallel. The file is removed when the value is dropped, whatever the
/// outcome of the comparison it fed; removal failures are swallowed
/// since the file may already be gone.
#[derive(Debug)]
pub struct CaptureFile {
    path: PathBuf,
}

impl CaptureFile {
    /// Create a fresh, empty capture file under `scratch_dir`, creating
    /// the directory first if it does not exist yet.
    pub fn create(scratch_dir: &Path) -> Result<Self, CaptureError> {
        fs::create_dir_all(scratch_dir).map_err(|source| CaptureError::Scratch {
            path: scratch_dir.display().to_string(),
            source,
        })?;

        let path = scratch_dir.join(format!("{}.out", Uuid::new_v4()));
        File::create(&path).map_err(|source| CaptureError::Create {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self { path })
    }

    /// Location of the capture file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the capture file for writing, truncating any earlier content.
    /// The returned handle is what a child process's stdout gets wired to.
    pub fn open_for_write(&self) -> Result<File, CaptureError> {
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| CaptureError::Create {
                path: self.path.display().to_string(),
                source,
            })
    }
}

impl Drop for CaptureFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
