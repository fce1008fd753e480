// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAIN_BANK_ID: &str = "main";

/// Marker appended to descriptions of scheduler-materialized transactions.
pub const AUTO_SUFFIX: &str = " (Auto)";

pub const AUTO_NOTES: &str = "Automatically added from recurring transaction";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Manual,
    Recurring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    /// Always positive; direction is carried by `kind`.
    pub amount: Decimal,
    pub category: String,
    #[serde(default = "default_bank_id")]
    pub bank_id: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default = "default_origin")]
    pub origin: Origin,
}

fn default_bank_id() -> String {
    MAIN_BANK_ID.to_string()
}

fn default_origin() -> Origin {
    Origin::Manual
}

/// Only monthly recurrence is processed; any other persisted value
/// deserializes to `Unsupported` and is never due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Unsupported,
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "monthly" => Frequency::Monthly,
            _ => Frequency::Unsupported,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringRule {
    pub id: String,
    pub active: bool,
    pub frequency: Frequency,
    /// Calendar day-of-month (1-31) the rule becomes due.
    pub day: u32,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub description: String,
    #[serde(default = "default_bank_id")]
    pub bank_id: String,
    #[serde(default)]
    pub last_processed: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: Decimal,
    pub color: String,
}

impl Bank {
    /// The default account every fresh ledger starts with.
    pub fn main_default() -> Bank {
        Bank {
            id: MAIN_BANK_ID.to_string(),
            name: "Main Account".to_string(),
            kind: "savings".to_string(),
            balance: Decimal::ZERO,
            color: "#4f46e5".to_string(),
        }
    }
}

/// Monthly budget goals, category key -> budgeted amount.
pub type BudgetGoals = BTreeMap<String, Decimal>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
    Unknown,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: CategoryKind,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: "scholarship", name: "Scholarship", icon: "🎓", kind: CategoryKind::Income },
    CategoryInfo { key: "allowance", name: "Family Allowance", icon: "👨‍👩‍👧‍👦", kind: CategoryKind::Income },
    CategoryInfo { key: "part-time", name: "Part-time Job", icon: "💼", kind: CategoryKind::Income },
    CategoryInfo { key: "other-income", name: "Other Income", icon: "💰", kind: CategoryKind::Income },
    CategoryInfo { key: "food", name: "Food & Dining", icon: "🍔", kind: CategoryKind::Expense },
    CategoryInfo { key: "transport", name: "Transportation", icon: "🚌", kind: CategoryKind::Expense },
    CategoryInfo { key: "books", name: "Books & Supplies", icon: "📚", kind: CategoryKind::Expense },
    CategoryInfo { key: "rent", name: "Rent & Utilities", icon: "🏠", kind: CategoryKind::Expense },
    CategoryInfo { key: "entertainment", name: "Entertainment", icon: "🎬", kind: CategoryKind::Expense },
    CategoryInfo { key: "clothing", name: "Clothing", icon: "👕", kind: CategoryKind::Expense },
    CategoryInfo { key: "health", name: "Healthcare", icon: "🏥", kind: CategoryKind::Expense },
    CategoryInfo { key: "other", name: "Others", icon: "📦", kind: CategoryKind::Expense },
];

const UNKNOWN_CATEGORY: CategoryInfo = CategoryInfo {
    key: "unknown",
    name: "Unknown",
    icon: "❓",
    kind: CategoryKind::Unknown,
};

/// Total lookup over the fixed category table. Unknown keys degrade to a
/// placeholder entry instead of erroring.
pub fn category_info(key: &str) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|c| c.key == key)
        .unwrap_or(&UNKNOWN_CATEGORY)
}

pub fn categories_of_kind(kind: CategoryKind) -> impl Iterator<Item = &'static CategoryInfo> {
    CATEGORIES.iter().filter(move |c| c.kind == kind)
}
