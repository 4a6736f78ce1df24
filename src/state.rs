// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::bookmarks::BookmarkList;
use crate::errors::Result;
use crate::ledger::{Ledger, TxUpdate};
use crate::models::{Bookmark, Snapshot, Theme, Transaction, DEFAULT_USER_NAME};
use crate::persistence;

/// Owns the one live [`Snapshot`] for a session. Every mutation goes through
/// here so callers can tell whether there is anything to write back.
#[derive(Debug, Default)]
pub struct Dashboard {
    snapshot: Snapshot,
    dirty: bool,
}

impl Dashboard {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            dirty: false,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn ledger(&self) -> &Ledger {
        &self.snapshot.ledger
    }

    pub fn bookmarks(&self) -> &BookmarkList {
        &self.snapshot.bookmarks
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call after the snapshot has been written out.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Swaps in a whole new snapshot.
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.dirty = true;
    }

    /// Parses `text` and replaces the live snapshot only if parsing succeeded.
    pub fn reload_from_json(&mut self, text: &str) -> Result<()> {
        let snapshot = persistence::from_json(text)?;
        self.replace(snapshot);
        Ok(())
    }

    pub fn append_transaction(&mut self) -> usize {
        self.dirty = true;
        self.snapshot.ledger.append()
    }

    pub fn append_transaction_on(&mut self, date: NaiveDate) -> usize {
        self.dirty = true;
        self.snapshot.ledger.append_on(date)
    }

    pub fn update_transaction(&mut self, index: usize, update: TxUpdate) -> Result<()> {
        self.snapshot.ledger.update(index, update)?;
        self.dirty = true;
        Ok(())
    }

    pub fn remove_transaction(&mut self, index: usize) -> Result<Transaction> {
        let removed = self.snapshot.ledger.remove(index)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn set_base_balance(&mut self, raw: &str) -> bool {
        let applied = self.snapshot.ledger.set_base_balance(raw);
        self.dirty |= applied;
        applied
    }

    pub fn add_bookmark(&mut self, name: &str, url: &str) -> bool {
        let added = self.snapshot.bookmarks.add(name, url);
        self.dirty |= added;
        added
    }

    pub fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark> {
        let removed = self.snapshot.bookmarks.remove(index)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn swap_bookmarks(&mut self, i: usize, j: usize) -> Result<()> {
        self.snapshot.bookmarks.swap(i, j)?;
        self.dirty = true;
        Ok(())
    }

    pub fn import_bookmarks(&mut self, markup: &str) -> Result<usize> {
        let n = self.snapshot.bookmarks.import_document(markup)?;
        self.dirty = true;
        Ok(n)
    }

    /// An empty name falls back to the default greeting name.
    pub fn save_settings(&mut self, name: &str, wallpaper: &str) {
        self.snapshot.user_name = if name.is_empty() {
            DEFAULT_USER_NAME.to_string()
        } else {
            name.to_string()
        };
        self.snapshot.wallpaper = wallpaper.to_string();
        self.dirty = true;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.snapshot.theme = self.snapshot.theme.toggled();
        self.dirty = true;
        self.snapshot.theme
    }

    /// Fills an empty ledger with the demo data. Returns whether it did.
    pub fn seed_sample_if_empty(&mut self) -> bool {
        if !self.snapshot.ledger.is_empty() {
            return false;
        }
        self.snapshot.ledger = Snapshot::sample().ledger;
        self.dirty = true;
        true
    }
}
