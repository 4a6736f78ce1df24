// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::Deserializer;
use serde::ser::{Error as _, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bookmarks::BookmarkList;
use crate::ledger::Ledger;
use crate::utils::{coerce_number, stored_date};

pub const DEFAULT_USER_NAME: &str = "User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    #[default]
    Expense,
}

impl TxKind {
    /// Stored labels other than exactly `income` count as expenses.
    pub fn from_label(s: &str) -> Self {
        if s == "income" {
            TxKind::Income
        } else {
            TxKind::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TxKind {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(d)?.unwrap_or_default();
        Ok(TxKind::from_label(&label))
    }
}

/// A stored amount exactly as it sits in the snapshot. Older files may carry
/// free text here; [`Amount::value`] is the only way readers should look at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(Decimal),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> Decimal {
        match self {
            Amount::Number(d) => *d,
            Amount::Text(s) => coerce_number(s),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Number(Decimal::ZERO)
    }
}

impl From<Decimal> for Amount {
    fn from(d: Decimal) -> Self {
        Amount::Number(d)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(d) => write!(f, "{}", d),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Number(d) => serialize_number(d, s),
            Amount::Text(t) => s.serialize_str(t),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(match serde_json::Value::deserialize(d)? {
            serde_json::Value::Number(n) => {
                let raw = n.to_string();
                match Decimal::from_str(&raw).or_else(|_| Decimal::from_scientific(&raw)) {
                    Ok(d) => Amount::Number(d),
                    Err(_) => Amount::Text(raw),
                }
            }
            serde_json::Value::String(s) => Amount::Text(s),
            serde_json::Value::Null => Amount::Text(String::new()),
            other => Amount::Text(other.to_string()),
        })
    }
}

/// Writes a decimal as a bare JSON number carrying its exact digits.
pub(crate) fn serialize_number<S: Serializer>(d: &Decimal, s: S) -> Result<S::Ok, S::Error> {
    serde_json::Number::from_str(&d.to_string())
        .map_err(|e| S::Error::custom(format!("{} is not a JSON number: {}", d, e)))?
        .serialize(s)
}

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Amount,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: &str,
        category: &str,
        kind: TxKind,
        amount: Decimal,
    ) -> Self {
        Self {
            date: date.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            kind,
            amount: Amount::Number(amount),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        stored_date(&self.date)
    }

    /// Amount with the sign it contributes to a balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxKind::Income => self.amount.value(),
            TxKind::Expense => -self.amount.value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bookmark {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

/// Everything that is saved and loaded as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub user_name: String,
    pub wallpaper: String,
    pub ledger: Ledger,
    pub bookmarks: BookmarkList,
    pub theme: Theme,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            wallpaper: String::new(),
            ledger: Ledger::default(),
            bookmarks: BookmarkList::default(),
            theme: Theme::default(),
        }
    }
}

impl Snapshot {
    /// The demo ledger shown to first-time users.
    pub fn sample() -> Self {
        let rows: [(&str, &str, &str, TxKind, i64); 7] = [
            ("2025-09-01", "Salary", "Income", TxKind::Income, 50000),
            ("2025-09-05", "Groceries", "Food", TxKind::Expense, 3000),
            ("2025-09-10", "Electricity Bill", "Utilities", TxKind::Expense, 1200),
            ("2025-09-15", "Freelance", "Income", TxKind::Income, 10000),
            ("2025-09-20", "Restaurant", "Food", TxKind::Expense, 1500),
            ("2025-10-01", "Salary", "Income", TxKind::Income, 50000),
            ("2025-10-03", "Rent", "Housing", TxKind::Expense, 15000),
        ];
        let transactions = rows
            .into_iter()
            .map(|(date, description, category, kind, amount)| Transaction {
                date: date.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                kind,
                amount: Amount::Number(Decimal::from(amount)),
            })
            .collect();
        Self {
            ledger: Ledger::new(Decimal::from(20000), transactions),
            ..Self::default()
        }
    }
}

struct BalanceNumber<'a>(&'a Decimal);

impl Serialize for BalanceNumber<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, s)
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let base_balance = self.ledger.base_balance();
        let mut st = s.serialize_struct("Snapshot", 6)?;
        st.serialize_field("userName", &self.user_name)?;
        st.serialize_field("wallpaper", &self.wallpaper)?;
        st.serialize_field("bankBalance", &BalanceNumber(&base_balance))?;
        st.serialize_field("bookmarks", &self.bookmarks)?;
        st.serialize_field("expenses", self.ledger.transactions())?;
        st.serialize_field("theme", &self.theme)?;
        st.end()
    }
}

#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SnapshotFile {
    user_name: String,
    wallpaper: String,
    bank_balance: Amount,
    bookmarks: BookmarkList,
    expenses: Vec<Transaction>,
    theme: Theme,
}

impl Default for SnapshotFile {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            wallpaper: String::new(),
            bank_balance: Amount::default(),
            bookmarks: BookmarkList::default(),
            expenses: Vec::new(),
            theme: Theme::default(),
        }
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let file = SnapshotFile::deserialize(d)?;
        Ok(Snapshot {
            user_name: file.user_name,
            wallpaper: file.wallpaper,
            ledger: Ledger::new(file.bank_balance.value(), file.expenses),
            bookmarks: file.bookmarks,
            theme: file.theme,
        })
    }
}
