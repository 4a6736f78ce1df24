// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::{balance_trend, category_aggregates, monthly_aggregates, summary};
use crate::state::Dashboard;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(dash: &Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary_report(dash, sub)?,
        Some(("monthly", sub)) => monthly(dash, sub)?,
        Some(("categories", sub)) => categories(dash, sub)?,
        Some(("trend", sub)) => trend(dash, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary_report(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let s = summary(dash.ledger());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_money(&s.income)],
            vec!["Expense".to_string(), fmt_money(&s.expense)],
            vec!["Net".to_string(), fmt_money(&s.balance)],
            vec!["Bank balance".to_string(), fmt_money(&s.total_balance)],
        ];
        println!(
            "Hello, {}\n{}",
            dash.snapshot().user_name,
            pretty_table(&["", "Amount"], rows)
        );
    }
    Ok(())
}

pub fn monthly_rows(dash: &Dashboard) -> Vec<Vec<String>> {
    let series = monthly_aggregates(dash.ledger());
    series
        .labels()
        .into_iter()
        .zip(series.income.iter().zip(series.expense.iter()))
        .map(|(label, (inc, exp))| vec![label, format!("{:.2}", inc), format!("{:.2}", exp)])
        .collect()
}

fn monthly(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let series = monthly_aggregates(dash.ledger());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense"], monthly_rows(dash))
        );
    }
    Ok(())
}

fn categories(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let series = category_aggregates(dash.ledger());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        let rows = series
            .labels
            .iter()
            .zip(series.values.iter())
            .map(|(cat, amt)| vec![cat.clone(), format!("{:.2}", amt)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn trend(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let points = balance_trend(dash.ledger());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        let rows = points
            .iter()
            .map(|p| vec![p.date.clone(), fmt_money(&p.balance)])
            .collect();
        println!("{}", pretty_table(&["Date", "Balance"], rows));
    }
    Ok(())
}
