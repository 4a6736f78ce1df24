// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{check_index, Result};
use crate::models::{Amount, Transaction, TxKind};
use crate::utils::parse_number;

/// Field-level edits to one transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TxUpdate {
    SetDate(NaiveDate),
    SetDescription(String),
    SetCategory(String),
    SetKind(TxKind),
    SetAmount(Amount),
}

impl TxUpdate {
    fn apply(self, tx: &mut Transaction) {
        match self {
            TxUpdate::SetDate(date) => tx.date = date.to_string(),
            TxUpdate::SetDescription(text) => tx.description = text,
            TxUpdate::SetCategory(text) => tx.category = text,
            TxUpdate::SetKind(kind) => tx.kind = kind,
            TxUpdate::SetAmount(amount) => tx.amount = amount,
        }
    }
}

/// Base bank balance plus every transaction in stored order. Transactions
/// have no identity beyond their position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ledger {
    base_balance: Decimal,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(base_balance: Decimal, transactions: Vec<Transaction>) -> Self {
        Self {
            base_balance,
            transactions,
        }
    }

    pub fn base_balance(&self) -> Decimal {
        self.base_balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// Appends a blank expense dated today (UTC) and returns its index.
    pub fn append(&mut self) -> usize {
        self.append_on(chrono::Utc::now().date_naive())
    }

    pub fn append_on(&mut self, date: NaiveDate) -> usize {
        self.push(Transaction::new(date, "", "", TxKind::Expense, Decimal::ZERO))
    }

    pub fn push(&mut self, tx: Transaction) -> usize {
        self.transactions.push(tx);
        self.transactions.len() - 1
    }

    pub fn update(&mut self, index: usize, update: TxUpdate) -> Result<()> {
        check_index("transaction", index, self.transactions.len())?;
        update.apply(&mut self.transactions[index]);
        Ok(())
    }

    /// Removes the row at `index`; later rows shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Transaction> {
        check_index("transaction", index, self.transactions.len())?;
        Ok(self.transactions.remove(index))
    }

    /// Applies `raw` as the new base balance when it reads as a number.
    /// Returns whether it was applied; non-numeric input is ignored.
    pub fn set_base_balance(&mut self, raw: &str) -> bool {
        match parse_number(raw) {
            Some(value) => {
                self.base_balance = value;
                true
            }
            None => false,
        }
    }
}
