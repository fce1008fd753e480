// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::models::{AUTO_NOTES, AUTO_SUFFIX, Bank, Frequency, Origin, RecurringRule, Transaction, TxKind};

/// Result of one scheduler pass. Collections are updated copies of the
/// caller's snapshots; nothing is mutated in place.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Materialized this pass, newest-first, ready to prepend to the ledger.
    pub new_transactions: Vec<Transaction>,
    pub rules: Vec<RecurringRule>,
    pub banks: Vec<Bank>,
    pub any_processed: bool,
}

/// Whether `rule` should materialize an instance on `today`.
///
/// A rule is due when it is active, monthly, today's day-of-month is at or
/// past the rule's day, and it has not already been processed this calendar
/// month. This caps materialization at one instance per rule per calendar
/// month; a rule whose `day` has not been reached yet, never-processed or
/// not, simply waits for the next qualifying tick.
pub fn is_due(rule: &RecurringRule, today: NaiveDate) -> bool {
    if !rule.active || rule.frequency != Frequency::Monthly {
        return false;
    }
    if today.day() < rule.day {
        return false;
    }
    match rule.last_processed {
        None => true,
        Some(last) => last.month() != today.month() || last.year() != today.year(),
    }
}

/// Evaluates every rule against `today` and materializes one transaction per
/// due rule: bank balance delta applied, recurrence cursor advanced. The
/// returned collections must be persisted together as one unit.
///
/// A due rule whose `bank_id` matches no bank still yields a transaction but
/// leaves every balance untouched; no bank is created for it. The pass is
/// idempotent: running it again over the returned rules and the same `today`
/// materializes nothing.
pub fn process_due_rules(
    rules: &[RecurringRule],
    banks: &[Bank],
    today: NaiveDate,
) -> ProcessOutcome {
    let mut rules = rules.to_vec();
    let mut banks = banks.to_vec();
    let mut new_transactions = Vec::new();

    for rule in rules.iter_mut() {
        if !is_due(rule, today) {
            continue;
        }
        new_transactions.push(materialize(rule, today));
        let delta = match rule.kind {
            TxKind::Income => rule.amount,
            TxKind::Expense => -rule.amount,
        };
        if let Some(bank) = banks.iter_mut().find(|b| b.id == rule.bank_id) {
            bank.balance += delta;
        }
        rule.last_processed = Some(today);
    }

    // Newest first, matching the ledger's most-recent-first ordering.
    new_transactions.reverse();
    let any_processed = !new_transactions.is_empty();
    ProcessOutcome {
        new_transactions,
        rules,
        banks,
        any_processed,
    }
}

fn materialize(rule: &RecurringRule, today: NaiveDate) -> Transaction {
    Transaction {
        id: Uuid::new_v4().to_string(),
        kind: rule.kind,
        amount: rule.amount,
        category: rule.category.clone(),
        bank_id: rule.bank_id.clone(),
        date: today,
        description: format!("{}{}", rule.description, AUTO_SUFFIX),
        notes: Some(AUTO_NOTES.to_string()),
        // Stamped from the injected date; the scheduler never reads a clock.
        timestamp: today.and_time(chrono::NaiveTime::MIN).and_utc(),
        origin: Origin::Recurring,
    }
}
