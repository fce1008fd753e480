// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::engine::aggregate::{
    BudgetStatus, HealthStatus, Severity, budget_progress, budget_status, filter_by_date_range,
    filter_by_month, financial_status, group_by_category, savings_rate, totals_by_type,
};
use pocketledger::models::{Origin, Transaction, TxKind};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(kind: TxKind, amount: &str, category: &str, d: NaiveDate) -> Transaction {
    Transaction {
        id: format!("{}-{}", category, amount),
        kind,
        amount: amount.parse().unwrap(),
        category: category.to_string(),
        bank_id: "main".to_string(),
        date: d,
        description: category.to_string(),
        notes: None,
        timestamp: d.and_hms_opt(12, 0, 0).unwrap().and_utc(),
        origin: Origin::Manual,
    }
}

#[test]
fn totals_partition_by_type() {
    let d = date(2024, 3, 1);
    let ledger = vec![
        tx(TxKind::Income, "100", "allowance", d),
        tx(TxKind::Expense, "40", "food", d),
        tx(TxKind::Expense, "10", "transport", d),
    ];
    let totals = totals_by_type(&ledger);
    assert_eq!(totals.income, Decimal::from(100));
    assert_eq!(totals.expense, Decimal::from(50));
    assert_eq!(totals.net, Decimal::from(50));
}

#[test]
fn empty_ledger_aggregates_to_zeroes() {
    let totals = totals_by_type(&[]);
    assert_eq!(totals.income, Decimal::ZERO);
    assert_eq!(totals.expense, Decimal::ZERO);
    assert_eq!(totals.net, Decimal::ZERO);
    assert!(group_by_category(&[]).is_empty());
    assert!(filter_by_month(&[], 2024, 3).is_empty());
    assert!(filter_by_date_range(&[], date(2024, 1, 1), date(2024, 12, 31)).is_empty());
    assert_eq!(savings_rate(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    assert_eq!(
        financial_status(Decimal::ZERO, Decimal::ZERO).status,
        HealthStatus::GettingStarted
    );
}

#[test]
fn groups_keep_first_seen_order() {
    let d = date(2024, 3, 5);
    let ledger = vec![
        tx(TxKind::Expense, "5", "food", d),
        tx(TxKind::Expense, "7", "books", d),
        tx(TxKind::Expense, "3", "food", d),
    ];
    let groups = group_by_category(&ledger);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].category, "food");
    assert_eq!(groups[0].total, Decimal::from(8));
    assert_eq!(groups[0].count, 2);
    assert_eq!(groups[1].category, "books");
    assert_eq!(groups[1].count, 1);
}

#[test]
fn date_range_bounds_are_inclusive() {
    let ledger = vec![
        tx(TxKind::Expense, "1", "food", date(2024, 3, 1)),
        tx(TxKind::Expense, "2", "food", date(2024, 3, 15)),
        tx(TxKind::Expense, "3", "food", date(2024, 3, 31)),
        tx(TxKind::Expense, "4", "food", date(2024, 4, 1)),
    ];
    let hits = filter_by_date_range(&ledger, date(2024, 3, 1), date(2024, 3, 31));
    assert_eq!(hits.len(), 3);
}

#[test]
fn month_filter_matches_year_and_month() {
    let ledger = vec![
        tx(TxKind::Expense, "1", "food", date(2023, 3, 10)),
        tx(TxKind::Expense, "2", "food", date(2024, 3, 10)),
        tx(TxKind::Expense, "3", "food", date(2024, 4, 10)),
    ];
    let hits = filter_by_month(&ledger, 2024, 3);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].amount, Decimal::from(2));
}

#[test]
fn savings_rate_handles_zero_and_negative_margins() {
    assert_eq!(savings_rate(Decimal::ZERO, Decimal::from(10)), Decimal::ZERO);
    assert_eq!(
        savings_rate(Decimal::from(100), Decimal::from(25)),
        Decimal::from(75)
    );
    assert_eq!(
        savings_rate(Decimal::from(100), Decimal::from(150)),
        Decimal::from(-50)
    );
}

#[test]
fn budget_progress_is_clamped() {
    assert_eq!(
        budget_progress(Decimal::from(50), Decimal::from(100)),
        Decimal::from(50)
    );
    assert_eq!(
        budget_progress(Decimal::from(250), Decimal::from(100)),
        Decimal::from(100)
    );
    assert_eq!(budget_progress(Decimal::from(50), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn budget_status_band_boundaries() {
    let b = Decimal::from(100);
    assert_eq!(budget_status(Decimal::from(100), b), BudgetStatus::OverBudget);
    assert_eq!(budget_status(Decimal::from(90), b), BudgetStatus::NearLimit);
    assert_eq!(budget_status(Decimal::from(75), b), BudgetStatus::Warning);
    assert_eq!(
        budget_status("74.9".parse().unwrap(), b),
        BudgetStatus::OnTrack
    );
    // Spending past the budget stays over-budget even though progress clamps
    assert_eq!(budget_status(Decimal::from(150), b), BudgetStatus::OverBudget);
}

#[test]
fn financial_status_policy_order() {
    let s = financial_status(Decimal::ZERO, Decimal::from(40));
    assert_eq!(s.status, HealthStatus::GettingStarted);
    assert_eq!(s.severity, Severity::Caution);

    let s = financial_status(Decimal::from(100), Decimal::from(120));
    assert_eq!(s.status, HealthStatus::Overspending);
    assert_eq!(s.severity, Severity::Alert);

    let s = financial_status(Decimal::from(100), Decimal::from(85));
    assert_eq!(s.status, HealthStatus::HighSpending);
    assert_eq!(s.severity, Severity::Caution);

    // Exactly 80% is not "high spending"; the threshold is strict
    let s = financial_status(Decimal::from(100), Decimal::from(80));
    assert_eq!(s.status, HealthStatus::Balanced);
    assert_eq!(s.severity, Severity::Balanced);
}

#[test]
fn aggregation_does_not_mutate_input() {
    let d = date(2024, 3, 5);
    let ledger = vec![
        tx(TxKind::Income, "100", "allowance", d),
        tx(TxKind::Expense, "30", "food", d),
    ];
    let before: Vec<String> = ledger.iter().map(|t| t.id.clone()).collect();
    let _ = totals_by_type(&ledger);
    let _ = group_by_category(&ledger);
    let after: Vec<String> = ledger.iter().map(|t| t.id.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(ledger[1].amount, Decimal::from(30));
}
