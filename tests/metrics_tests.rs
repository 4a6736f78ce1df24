// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use homedash::ledger::Ledger;
use homedash::metrics::{self, MonthKey, TxFilter};
use homedash::models::{Amount, Transaction, TxKind};
use rust_decimal::Decimal;

fn d(n: i64) -> Decimal {
    Decimal::from(n)
}

fn tx(date: &str, description: &str, category: &str, kind: TxKind, amount: i64) -> Transaction {
    Transaction::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description,
        category,
        kind,
        d(amount),
    )
}

fn september() -> Ledger {
    Ledger::new(
        d(20000),
        vec![
            tx("2025-09-01", "Salary", "Income", TxKind::Income, 50000),
            tx("2025-09-05", "Groceries", "Food", TxKind::Expense, 3000),
            tx("2025-09-10", "Electricity Bill", "Utilities", TxKind::Expense, 1200),
            tx("2025-09-15", "Freelance", "Income", TxKind::Income, 10000),
            tx("2025-09-20", "Restaurant", "Food", TxKind::Expense, 1500),
        ],
    )
}

#[test]
fn totals_and_summary_for_september() {
    let ledger = september();
    let t = metrics::totals(&ledger);
    assert_eq!(t.income, d(60000));
    assert_eq!(t.expense, d(5700));
    assert_eq!(t.balance, d(54300));
    assert_eq!(t.balance, t.income - t.expense);

    let s = metrics::summary(&ledger);
    assert_eq!(s.total_balance, d(74300));
    assert_eq!(s.total_balance, ledger.base_balance() + t.income - t.expense);
    assert_eq!(metrics::summary(&ledger), s);
}

#[test]
fn malformed_amounts_contribute_zero() {
    let mut ledger = september();
    let mut bad = tx("2025-09-21", "Typo", "Food", TxKind::Expense, 0);
    bad.amount = Amount::Text("abc".into());
    ledger.push(bad);
    let mut partial = tx("2025-09-22", "Tip", "Food", TxKind::Expense, 0);
    partial.amount = Amount::Text("12.5 rupees".into());
    ledger.push(partial);

    let t = metrics::totals(&ledger);
    assert_eq!(t.expense, d(5700) + Decimal::new(125, 1));
}

#[test]
fn running_balance_uses_stored_order() {
    let mut ledger = september();
    // out of date order on purpose
    ledger.push(tx("2025-08-01", "Old refund", "", TxKind::Income, 100));

    assert_eq!(metrics::running_balance(&ledger, 0).unwrap(), d(70000));
    assert_eq!(metrics::running_balance(&ledger, 1).unwrap(), d(67000));
    let last = ledger.len() - 1;
    let t = metrics::totals(&ledger);
    assert_eq!(
        metrics::running_balance(&ledger, last).unwrap(),
        t.balance + ledger.base_balance()
    );
    assert_eq!(
        metrics::running_balances(&ledger),
        (0..ledger.len())
            .map(|i| metrics::running_balance(&ledger, i).unwrap())
            .collect::<Vec<_>>()
    );
}

#[test]
fn running_balance_rejects_out_of_range() {
    let ledger = september();
    assert!(metrics::running_balance(&ledger, 5).is_err());
    assert!(metrics::running_balance(&Ledger::default(), 0).is_err());
}

#[test]
fn monthly_aggregates_sorted_with_invalid_last() {
    let mut ledger = september();
    ledger.push(tx("2024-12-31", "Bonus", "Income", TxKind::Income, 700));
    ledger.push(tx("2025-10-03", "Rent", "Housing", TxKind::Expense, 15000));
    let mut undated = tx("2025-01-01", "Mystery", "Misc", TxKind::Expense, 5);
    undated.date = "someday".into();
    ledger.push(undated);

    let series = metrics::monthly_aggregates(&ledger);
    assert_eq!(
        series.months,
        vec![
            MonthKey::Month { year: 2024, month: 12 },
            MonthKey::Month { year: 2025, month: 9 },
            MonthKey::Month { year: 2025, month: 10 },
            MonthKey::Invalid,
        ]
    );
    assert_eq!(
        series.labels(),
        vec!["12/2024", "09/2025", "10/2025", "Invalid Date"]
    );
    assert_eq!(series.income, vec![d(700), d(60000), d(0), d(0)]);
    assert_eq!(series.expense, vec![d(0), d(5700), d(15000), d(5)]);
    assert!(series.months.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn category_aggregates_keep_first_seen_order() {
    let mut ledger = september();
    ledger.push(tx("2025-09-25", "Untagged", "", TxKind::Expense, 999));
    let series = metrics::category_aggregates(&ledger);
    assert_eq!(series.labels, vec!["Food", "Utilities"]);
    assert_eq!(series.values, vec![d(4500), d(1200)]);
}

#[test]
fn balance_trend_sorts_a_copy_by_date() {
    let ledger = Ledger::new(
        d(100),
        vec![
            tx("2025-03-01", "b", "", TxKind::Expense, 10),
            tx("2025-01-01", "a", "", TxKind::Income, 50),
            tx("2025-03-01", "c", "", TxKind::Income, 5),
        ],
    );
    let before = ledger.clone();
    let points = metrics::balance_trend(&ledger);

    assert_eq!(ledger, before);
    assert_eq!(points.len(), ledger.len());
    let dates: Vec<_> = points.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-01-01", "2025-03-01", "2025-03-01"]);
    let balances: Vec<_> = points.iter().map(|p| p.balance).collect();
    // same-day rows keep stored order: -10 before +5
    assert_eq!(balances, vec![d(150), d(140), d(145)]);
}

#[test]
fn balance_trend_puts_undated_rows_last() {
    let mut undated = tx("2025-01-01", "x", "", TxKind::Expense, 1);
    undated.date = String::new();
    let ledger = Ledger::new(
        d(0),
        vec![undated, tx("2025-02-01", "y", "", TxKind::Income, 10)],
    );
    let points = metrics::balance_trend(&ledger);
    assert_eq!(points[0].date, "2025-02-01");
    assert_eq!(points[1].date, "");
    assert_eq!(points[1].balance, d(9));
}

#[test]
fn filter_by_month_year_and_search() {
    let ledger = september();
    let filter = TxFilter::new(Some(9), Some(2025), Some("food"));
    let visible = metrics::visibility(&ledger, &filter);
    assert_eq!(visible, vec![false, true, false, false, true]);

    let by_description = TxFilter::new(None, None, Some("BILL"));
    assert_eq!(
        metrics::visibility(&ledger, &by_description),
        vec![false, false, true, false, false]
    );

    let other_month = TxFilter::new(Some(10), None, None);
    assert!(metrics::visibility(&ledger, &other_month).iter().all(|v| !v));

    let everything = TxFilter::new(None, None, Some(""));
    assert!(metrics::visibility(&ledger, &everything).iter().all(|v| *v));
}

#[test]
fn filter_years_first_seen() {
    let mut ledger = september();
    ledger.push(tx("2024-05-05", "x", "", TxKind::Expense, 1));
    ledger.push(tx("2025-01-01", "y", "", TxKind::Expense, 1));
    assert_eq!(metrics::filter_years(&ledger), vec![2025, 2024]);
    assert_eq!(metrics::MONTH_NAMES[8], "Sep");
}
