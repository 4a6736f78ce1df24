// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use homedash::errors::DashError;
use homedash::ledger::{Ledger, TxUpdate};
use homedash::models::{Amount, TxKind};
use rust_decimal::Decimal;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn append_creates_blank_expense() {
    let mut ledger = Ledger::default();
    let idx = ledger.append_on(date("2025-09-30"));
    assert_eq!(idx, 0);
    let tx = ledger.get(0).unwrap();
    assert_eq!(tx.date, "2025-09-30");
    assert_eq!(tx.description, "");
    assert_eq!(tx.category, "");
    assert_eq!(tx.kind, TxKind::Expense);
    assert_eq!(tx.amount, Amount::Number(Decimal::ZERO));

    let today = chrono::Utc::now().date_naive();
    let idx = ledger.append();
    assert_eq!(idx, 1);
    assert_eq!(ledger.get(1).unwrap().parsed_date(), Some(today));
}

#[test]
fn update_applies_each_field() {
    let mut ledger = Ledger::default();
    ledger.append_on(date("2025-01-01"));
    ledger
        .update(0, TxUpdate::SetDate(date("2025-02-14")))
        .unwrap();
    ledger
        .update(0, TxUpdate::SetDescription("Flowers".into()))
        .unwrap();
    ledger
        .update(0, TxUpdate::SetCategory("Gifts".into()))
        .unwrap();
    ledger.update(0, TxUpdate::SetKind(TxKind::Income)).unwrap();
    ledger
        .update(0, TxUpdate::SetAmount(Amount::Number(Decimal::new(4999, 2))))
        .unwrap();

    let tx = ledger.get(0).unwrap();
    assert_eq!(tx.date, "2025-02-14");
    assert_eq!(tx.description, "Flowers");
    assert_eq!(tx.category, "Gifts");
    assert_eq!(tx.kind, TxKind::Income);
    assert_eq!(tx.amount.value(), Decimal::new(4999, 2));
}

#[test]
fn update_and_remove_reject_bad_index() {
    let mut ledger = Ledger::default();
    ledger.append_on(date("2025-01-01"));
    let before = ledger.clone();

    let err = ledger
        .update(3, TxUpdate::SetDescription("x".into()))
        .unwrap_err();
    assert!(matches!(
        err,
        DashError::IndexOutOfRange {
            index: 3,
            len: 1,
            ..
        }
    ));
    assert!(ledger.remove(1).is_err());
    assert_eq!(ledger, before);
}

#[test]
fn remove_shifts_later_rows() {
    let mut ledger = Ledger::default();
    for day in ["2025-01-01", "2025-01-02", "2025-01-03"] {
        ledger.append_on(date(day));
    }
    let removed = ledger.remove(1).unwrap();
    assert_eq!(removed.date, "2025-01-02");
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.get(1).unwrap().date, "2025-01-03");
}

#[test]
fn base_balance_ignores_non_numeric() {
    let mut ledger = Ledger::default();
    assert!(ledger.set_base_balance("1500.75"));
    assert_eq!(ledger.base_balance(), Decimal::new(150075, 2));

    assert!(!ledger.set_base_balance("lots"));
    assert!(!ledger.set_base_balance(""));
    assert_eq!(ledger.base_balance(), Decimal::new(150075, 2));

    assert!(ledger.set_base_balance("-20"));
    assert_eq!(ledger.base_balance(), Decimal::from(-20));
}
