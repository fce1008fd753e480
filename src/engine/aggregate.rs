// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a ledger snapshot. Every function here is total
//! over arbitrary transaction slices, including the empty slice, and leaves
//! its input untouched.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TxKind};

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub fn totals_by_type(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for t in transactions {
        match t.kind {
            TxKind::Income => totals.income += t.amount,
            TxKind::Expense => totals.expense += t.amount,
        }
    }
    totals.net = totals.income - totals.expense;
    totals
}

#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: String,
    pub transactions: Vec<&'a Transaction>,
    /// Direction-agnostic sum of amounts; combine with `kind` if a signed
    /// figure is needed.
    pub total: Decimal,
    pub count: usize,
}

/// Groups in first-seen order of the input sequence.
pub fn group_by_category(transactions: &[Transaction]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for t in transactions {
        match groups.iter_mut().find(|g| g.category == t.category) {
            Some(g) => {
                g.transactions.push(t);
                g.total += t.amount;
                g.count += 1;
            }
            None => groups.push(CategoryGroup {
                category: t.category.clone(),
                transactions: vec![t],
                total: t.amount,
                count: 1,
            }),
        }
    }
    groups
}

/// Inclusive calendar-date bounds.
pub fn filter_by_date_range<'a>(
    transactions: &'a [Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .collect()
}

pub fn filter_by_month(transactions: &[Transaction], year: i32, month: u32) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.year() == year && t.date.month() == month)
        .collect()
}

/// Percentage of income left after expenses; 0 for non-positive income,
/// negative when spending exceeds income.
pub fn savings_rate(income: Decimal, expenses: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (income - expenses) / income * Decimal::ONE_HUNDRED
}

/// Spent-over-budget percentage, clamped to [0, 100].
pub fn budget_progress(spent: Decimal, budgeted: Decimal) -> Decimal {
    if budgeted <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let progress = spent / budgeted * Decimal::ONE_HUNDRED;
    progress.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    OverBudget,
    NearLimit,
    Warning,
    OnTrack,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::OverBudget => "over-budget",
            BudgetStatus::NearLimit => "near-limit",
            BudgetStatus::Warning => "warning",
            BudgetStatus::OnTrack => "on-track",
        }
    }
}

/// Bands are inclusive at their lower bound, higher bands win.
pub fn budget_status(spent: Decimal, budgeted: Decimal) -> BudgetStatus {
    let progress = if budgeted <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        // Unclamped so the 100 band is reachable.
        spent / budgeted * Decimal::ONE_HUNDRED
    };
    if progress >= Decimal::ONE_HUNDRED {
        BudgetStatus::OverBudget
    } else if progress >= Decimal::from(90) {
        BudgetStatus::NearLimit
    } else if progress >= Decimal::from(75) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::OnTrack
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Balanced,
    Caution,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    GettingStarted,
    Overspending,
    HighSpending,
    Balanced,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::GettingStarted => "getting-started",
            HealthStatus::Overspending => "overspending",
            HealthStatus::HighSpending => "high-spending",
            HealthStatus::Balanced => "balanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FinancialStatus {
    pub status: HealthStatus,
    pub message: &'static str,
    pub severity: Severity,
}

/// Classifies a month's income/expense pair, first matching policy wins.
pub fn financial_status(income: Decimal, expenses: Decimal) -> FinancialStatus {
    if income == Decimal::ZERO {
        return FinancialStatus {
            status: HealthStatus::GettingStarted,
            message:
                "Add your first income and expense transactions to see your financial status.",
            severity: Severity::Caution,
        };
    }
    if expenses > income {
        return FinancialStatus {
            status: HealthStatus::Overspending,
            message: "Your expenses exceed your income this month. Review your spending and consider budget adjustments.",
            severity: Severity::Alert,
        };
    }
    if expenses / income > Decimal::new(8, 1) {
        return FinancialStatus {
            status: HealthStatus::HighSpending,
            message:
                "You're spending a high percentage of your income. Try to increase your savings rate.",
            severity: Severity::Caution,
        };
    }
    FinancialStatus {
        status: HealthStatus::Balanced,
        message: "Great job! Your spending is under control and you're saving consistently.",
        severity: Severity::Balanced,
    }
}
