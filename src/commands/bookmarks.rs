// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::DashError;
use crate::state::Dashboard;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").context("name missing")?.trim();
            let url = sub.get_one::<String>("url").context("url missing")?.trim();
            if dash.add_bookmark(name, url) {
                println!("Added bookmark '{}' -> {}", name, url);
            } else {
                println!("Bookmark needs both a name and a url");
            }
        }
        Some(("list", sub)) => {
            let items = dash.bookmarks().as_slice();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
                let rows = items
                    .iter()
                    .enumerate()
                    .map(|(i, b)| vec![i.to_string(), b.name.clone(), b.url.clone()])
                    .collect();
                println!("{}", pretty_table(&["#", "Name", "URL"], rows));
            }
        }
        Some(("rm", sub)) => {
            let index = *sub.get_one::<usize>("index").context("index missing")?;
            let removed = dash.remove_bookmark(index)?;
            println!("Removed bookmark '{}'", removed.name);
        }
        Some(("swap", sub)) => {
            let from = *sub.get_one::<usize>("from").context("from missing")?;
            let to = *sub.get_one::<usize>("to").context("to missing")?;
            dash.swap_bookmarks(from, to)?;
            println!("Swapped bookmarks {} and {}", from, to);
        }
        Some(("import", sub)) => import(dash, sub)?,
        _ => {}
    }
    Ok(())
}

fn import(dash: &mut Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").context("path missing")?.trim();
    let markup =
        std::fs::read_to_string(path).with_context(|| format!("Read bookmark file {}", path))?;
    match dash.import_bookmarks(&markup) {
        Ok(n) => println!("Imported {} bookmarks from {}", n, path),
        // not an error for the session: nothing was changed
        Err(DashError::NoBookmarksFound) => println!("No valid bookmarks found in {}", path),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
