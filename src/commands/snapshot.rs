// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::persistence::{self, EXPORT_FILE_NAME};
use crate::state::Dashboard;
use anyhow::{Context, Result};
use std::path::Path;

/// Writes the working snapshot, seeding demo rows first when asked.
pub fn init(dash: &mut Dashboard, sub: &clap::ArgMatches, working: &Path) -> Result<()> {
    if sub.get_flag("sample") && dash.seed_sample_if_empty() {
        println!("Seeded {} sample transactions", dash.ledger().len());
    }
    persistence::save_to(working, dash.snapshot())
        .with_context(|| format!("Write snapshot to {}", working.display()))?;
    dash.mark_saved();
    println!("Snapshot initialized at {}", working.display());
    Ok(())
}

pub fn save(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub
        .get_one::<String>("out")
        .map(|s| s.trim())
        .unwrap_or(EXPORT_FILE_NAME);
    persistence::save_to(Path::new(out), dash.snapshot())
        .with_context(|| format!("Write snapshot to {}", out))?;
    println!("Data saved to {}", out);
    Ok(())
}

/// Replaces the live snapshot with the file's contents. A file that does not
/// parse leaves the current state as it was.
pub fn load(dash: &mut Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").context("path missing")?.trim();
    let text = std::fs::read_to_string(path).with_context(|| format!("Read {}", path))?;
    dash.reload_from_json(&text)?;
    println!(
        "Loaded {} transactions and {} bookmarks from {}",
        dash.ledger().len(),
        dash.bookmarks().len(),
        path
    );
    Ok(())
}
