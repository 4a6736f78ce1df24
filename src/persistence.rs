// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Context;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{DashError, Result};
use crate::models::Snapshot;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Homedash", "homedash"));

/// File name offered when exporting a snapshot.
pub const EXPORT_FILE_NAME: &str = "home-expense-data.json";

/// Working snapshot location in the platform data dir.
pub fn snapshot_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("homedash.json"))
}

pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

pub fn from_json(text: &str) -> Result<Snapshot> {
    serde_json::from_str(text).map_err(|e| DashError::Load(e.to_string()))
}

pub fn save_to(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let json = to_json(snapshot)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "snapshot saved");
    Ok(())
}

pub fn load_from(path: &Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path)?;
    let snapshot = from_json(&text)?;
    tracing::info!(
        path = %path.display(),
        transactions = snapshot.ledger.len(),
        bookmarks = snapshot.bookmarks.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Loads the working snapshot, or starts empty when the file does not exist yet.
pub fn open_or_default(path: &Path) -> anyhow::Result<Snapshot> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no snapshot yet, starting empty");
        return Ok(Snapshot::default());
    }
    load_from(path).with_context(|| format!("Open snapshot at {}", path.display()))
}

/// Like [`open_or_default`], but a working file that cannot be read starts
/// empty instead of failing. Used by the commands that overwrite it anyway.
pub fn open_or_recover(path: &Path) -> Snapshot {
    match open_or_default(path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "unreadable snapshot, starting empty"
            );
            Snapshot::default()
        }
    }
}
