// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced by the ledger, bookmark and snapshot operations.
///
/// None of these are fatal: the in-memory snapshot is left untouched and the
/// caller may simply retry.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("{what} index {index} is out of range (have {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("Error loading file: {0}")]
    Load(String),
    #[error("No valid bookmarks found in the file")]
    NoBookmarksFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;

pub(crate) fn check_index(what: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(DashError::IndexOutOfRange { what, index, len })
    }
}
