// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::Dashboard;
use crate::utils::{fmt_money, pretty_table};
use anyhow::{Context, Result};

pub fn handle(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let current = dash.snapshot();
            let name = sub
                .get_one::<String>("name")
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| current.user_name.clone());
            let wallpaper = sub
                .get_one::<String>("wallpaper")
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| current.wallpaper.clone());
            dash.save_settings(&name, &wallpaper);
            println!("Settings saved for '{}'", dash.snapshot().user_name);
        }
        Some(("show", _)) => {
            let s = dash.snapshot();
            let rows = vec![
                vec!["Name".to_string(), s.user_name.clone()],
                vec!["Wallpaper".to_string(), s.wallpaper.clone()],
                vec!["Theme".to_string(), s.theme.to_string()],
                vec![
                    "Base balance".to_string(),
                    fmt_money(&s.ledger.base_balance()),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}

pub fn handle_theme(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("toggle", _)) = m.subcommand() {
        let theme = dash.toggle_theme();
        println!("Theme is now {}", theme);
    }
    Ok(())
}

pub fn handle_balance(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("set", sub)) = m.subcommand() {
        let raw = sub.get_one::<String>("value").context("value missing")?;
        if dash.set_base_balance(raw) {
            println!(
                "Base balance set to {}",
                fmt_money(&dash.ledger().base_balance())
            );
        } else {
            println!("Ignored non-numeric balance '{}'", raw);
        }
    }
    Ok(())
}
