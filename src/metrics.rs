// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures over a [`Ledger`]: totals, per-row running balances,
//! monthly and per-category series, and the date-ordered balance trend.
//!
//! Every function recomputes from scratch. Amounts are always read through
//! [`Amount::value`](crate::models::Amount::value), so malformed stored values
//! contribute zero instead of failing.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{check_index, Result};
use crate::ledger::Ledger;
use crate::models::{Transaction, TxKind};
use crate::utils::stored_date;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub total_balance: Decimal,
}

pub fn totals(ledger: &Ledger) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for tx in ledger.transactions() {
        match tx.kind {
            TxKind::Income => income += tx.amount.value(),
            TxKind::Expense => expense += tx.amount.value(),
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

pub fn summary(ledger: &Ledger) -> Summary {
    let t = totals(ledger);
    Summary {
        income: t.income,
        expense: t.expense,
        balance: t.balance,
        total_balance: ledger.base_balance() + t.balance,
    }
}

/// Balance after row `index`, walking rows in stored order (not by date).
pub fn running_balance(ledger: &Ledger, index: usize) -> Result<Decimal> {
    check_index("transaction", index, ledger.len())?;
    Ok(ledger.transactions()[..=index]
        .iter()
        .fold(ledger.base_balance(), |acc, tx| acc + tx.signed_amount()))
}

/// `running_balance` for every row in one pass.
pub fn running_balances(ledger: &Ledger) -> Vec<Decimal> {
    ledger
        .transactions()
        .iter()
        .scan(ledger.base_balance(), |acc, tx| {
            *acc += tx.signed_amount();
            Some(*acc)
        })
        .collect()
}

/// Calendar month bucket. Unparseable dates share the `Invalid` bucket, which
/// orders after every real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthKey {
    Month { year: i32, month: u32 },
    Invalid,
}

impl MonthKey {
    pub fn of(date: &str) -> Self {
        match stored_date(date) {
            Some(d) => MonthKey::Month {
                year: d.year(),
                month: d.month(),
            },
            None => MonthKey::Invalid,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKey::Month { year, month } => write!(f, "{:02}/{}", month, year),
            MonthKey::Invalid => f.write_str("Invalid Date"),
        }
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MonthlySeries {
    pub months: Vec<MonthKey>,
    pub income: Vec<Decimal>,
    pub expense: Vec<Decimal>,
}

impl MonthlySeries {
    /// Chart labels, `MM/YYYY`.
    pub fn labels(&self) -> Vec<String> {
        self.months.iter().map(ToString::to_string).collect()
    }
}

pub fn monthly_aggregates(ledger: &Ledger) -> MonthlySeries {
    let mut map: BTreeMap<MonthKey, (Decimal, Decimal)> = BTreeMap::new();
    for tx in ledger.transactions() {
        let entry = map
            .entry(MonthKey::of(&tx.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TxKind::Income => entry.0 += tx.amount.value(),
            TxKind::Expense => entry.1 += tx.amount.value(),
        }
    }
    let mut series = MonthlySeries::default();
    for (month, (inc, exp)) in map {
        series.months.push(month);
        series.income.push(inc);
        series.expense.push(exp);
    }
    series
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
}

/// Expense totals per non-empty category, in first-seen category order.
pub fn category_aggregates(ledger: &Ledger) -> CategorySeries {
    let mut series = CategorySeries::default();
    for tx in ledger.transactions() {
        if tx.kind != TxKind::Expense || tx.category.is_empty() {
            continue;
        }
        match series.labels.iter().position(|c| c == &tx.category) {
            Some(pos) => series.values[pos] += tx.amount.value(),
            None => {
                series.labels.push(tx.category.clone());
                series.values.push(tx.amount.value());
            }
        }
    }
    series
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub balance: Decimal,
}

/// One point per transaction, walking a date-sorted copy of the ledger.
/// Same-day rows keep their stored order; undated rows come last.
pub fn balance_trend(ledger: &Ledger) -> Vec<TrendPoint> {
    let mut sorted: Vec<&Transaction> = ledger.transactions().iter().collect();
    sorted.sort_by_key(|tx| {
        let date = tx.parsed_date();
        (date.is_none(), date)
    });
    let mut balance = ledger.base_balance();
    sorted
        .into_iter()
        .map(|tx| {
            balance += tx.signed_amount();
            TrendPoint {
                date: tx.date.clone(),
                balance,
            }
        })
        .collect()
}

/// Row visibility filter. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxFilter {
    pub month: Option<u32>,
    pub year: Option<i32>,
    search: Option<String>,
}

impl TxFilter {
    pub fn new(month: Option<u32>, year: Option<i32>, search: Option<&str>) -> Self {
        Self {
            month,
            year,
            search: search
                .map(|s| s.to_lowercase())
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let date = tx.parsed_date();
        let month_ok = self
            .month
            .is_none_or(|m| date.is_some_and(|d| d.month() == m));
        let year_ok = self
            .year
            .is_none_or(|y| date.is_some_and(|d| d.year() == y));
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            tx.description.to_lowercase().contains(needle)
                || tx.category.to_lowercase().contains(needle)
        });
        month_ok && year_ok && search_ok
    }
}

/// One flag per stored row; nothing is removed.
pub fn visibility(ledger: &Ledger, filter: &TxFilter) -> Vec<bool> {
    ledger
        .transactions()
        .iter()
        .map(|tx| filter.matches(tx))
        .collect()
}

/// Distinct years present in the ledger, first-seen order.
pub fn filter_years(ledger: &Ledger) -> Vec<i32> {
    let mut years = Vec::new();
    for year in ledger
        .transactions()
        .iter()
        .filter_map(|tx| tx.parsed_date().map(|d| d.year()))
    {
        if !years.contains(&year) {
            years.push(year);
        }
    }
    years
}
