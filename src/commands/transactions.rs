// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::TxUpdate;
use crate::metrics::{running_balances, TxFilter};
use crate::models::{Amount, TxKind};
use crate::state::Dashboard;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(dash, sub)?,
        Some(("list", sub)) => list(dash, sub)?,
        Some(("set", sub)) => set(dash, sub)?,
        Some(("rm", sub)) => rm(dash, sub)?,
        _ => {}
    }
    Ok(())
}

/// Turns the field flags present on `sub` into typed edits.
fn field_updates(sub: &clap::ArgMatches) -> Result<Vec<TxUpdate>> {
    let mut updates = Vec::new();
    if let Some(raw) = sub.get_one::<String>("date") {
        updates.push(TxUpdate::SetDate(parse_date(raw)?));
    }
    if let Some(text) = sub.get_one::<String>("description") {
        updates.push(TxUpdate::SetDescription(text.trim().to_string()));
    }
    if let Some(text) = sub.get_one::<String>("category") {
        updates.push(TxUpdate::SetCategory(text.trim().to_string()));
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        updates.push(TxUpdate::SetKind(TxKind::from_label(kind)));
    }
    if let Some(raw) = sub.get_one::<String>("amount") {
        updates.push(TxUpdate::SetAmount(Amount::Number(parse_decimal(raw)?)));
    }
    Ok(updates)
}

fn add(dash: &mut Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    // validate everything before touching the ledger
    let updates = field_updates(sub)?;
    let index = dash.append_transaction();
    for update in updates {
        dash.update_transaction(index, update)?;
    }
    let tx = &dash.ledger().transactions()[index];
    println!(
        "Added row {}: {} {} {} '{}'",
        index, tx.date, tx.kind, tx.amount, tx.description
    );
    Ok(())
}

fn set(dash: &mut Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").context("index missing")?;
    let updates = field_updates(sub)?;
    if updates.is_empty() {
        println!("Nothing to change for row {}", index);
        return Ok(());
    }
    for update in updates {
        dash.update_transaction(index, update)?;
    }
    println!("Updated row {}", index);
    Ok(())
}

fn rm(dash: &mut Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").context("index missing")?;
    let removed = dash.remove_transaction(index)?;
    println!(
        "Removed row {} ({} '{}')",
        index, removed.date, removed.description
    );
    Ok(())
}

fn list(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(dash, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.index.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.running_balance.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["#", "Date", "Description", "Category", "Type", "Amount", "Balance"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub index: usize,
    pub date: String,
    pub description: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
    pub running_balance: String,
}

/// Visible rows in stored order, each with its positional running balance.
pub fn query_rows(dash: &Dashboard, sub: &clap::ArgMatches) -> Vec<TransactionRow> {
    let filter = TxFilter::new(
        sub.get_one::<u32>("month").copied(),
        sub.get_one::<i32>("year").copied(),
        sub.get_one::<String>("search").map(|s| s.as_str()),
    );
    let ledger = dash.ledger();
    ledger
        .transactions()
        .iter()
        .zip(running_balances(ledger))
        .enumerate()
        .filter(|(_, (tx, _))| filter.matches(tx))
        .map(|(index, (tx, balance))| TransactionRow {
            index,
            date: tx.date.clone(),
            description: tx.description.clone(),
            category: tx.category.clone(),
            kind: tx.kind.to_string(),
            amount: format!("{:.2}", tx.amount.value()),
            running_balance: fmt_money(&balance),
        })
        .collect()
}
