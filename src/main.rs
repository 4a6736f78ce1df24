// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use homedash::{cli, commands, persistence, state::Dashboard, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("file") {
        Some(p) => PathBuf::from(p.trim()),
        None => persistence::snapshot_path()?,
    };
    // init and load replace the working file, so a corrupt one must not block them
    let snapshot = match matches.subcommand_name() {
        Some("init") | Some("load") => persistence::open_or_recover(&path),
        _ => persistence::open_or_default(&path)?,
    };
    let mut dash = Dashboard::new(snapshot);

    match matches.subcommand() {
        Some(("init", sub)) => commands::snapshot::init(&mut dash, sub, &path)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut dash, sub)?,
        Some(("balance", sub)) => commands::settings::handle_balance(&mut dash, sub)?,
        Some(("bookmark", sub)) => commands::bookmarks::handle(&mut dash, sub)?,
        Some(("report", sub)) => commands::reports::handle(&dash, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut dash, sub)?,
        Some(("theme", sub)) => commands::settings::handle_theme(&mut dash, sub)?,
        Some(("save", sub)) => commands::snapshot::save(&dash, sub)?,
        Some(("load", sub)) => commands::snapshot::load(&mut dash, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    if dash.is_dirty() {
        persistence::save_to(&path, dash.snapshot())?;
    }
    Ok(())
}
