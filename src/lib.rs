// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bookmarks;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod ledger;
pub mod metrics;
pub mod models;
pub mod persistence;
pub mod state;
pub mod utils;
