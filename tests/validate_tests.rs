// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::engine::validate::{
    ValidationError, check_amount, check_day, check_rule, check_transaction,
};
use pocketledger::models::{
    CategoryKind, Frequency, Origin, RecurringRule, Transaction, TxKind, category_info,
};
use rust_decimal::Decimal;

fn valid_tx() -> Transaction {
    Transaction {
        id: "t1".to_string(),
        kind: TxKind::Expense,
        amount: Decimal::from(12),
        category: "food".to_string(),
        bank_id: "main".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        description: "Lunch".to_string(),
        notes: None,
        timestamp: chrono::Utc::now(),
        origin: Origin::Manual,
    }
}

fn valid_rule() -> RecurringRule {
    RecurringRule {
        id: "r1".to_string(),
        active: true,
        frequency: Frequency::Monthly,
        day: 5,
        amount: Decimal::from(50),
        kind: TxKind::Expense,
        category: "rent".to_string(),
        description: "Dorm rent".to_string(),
        bank_id: "main".to_string(),
        last_processed: None,
    }
}

#[test]
fn accepts_well_formed_records() {
    assert!(check_transaction(&valid_tx()).is_ok());
    assert!(check_rule(&valid_rule()).is_ok());
}

#[test]
fn rejects_non_positive_amounts() {
    assert_eq!(
        check_amount(Decimal::ZERO),
        Err(ValidationError::NonPositiveAmount)
    );
    assert_eq!(
        check_amount(Decimal::from(-5)),
        Err(ValidationError::NonPositiveAmount)
    );
    let mut t = valid_tx();
    t.amount = Decimal::ZERO;
    assert!(check_transaction(&t).is_err());
}

#[test]
fn rejects_blank_description_and_category() {
    let mut t = valid_tx();
    t.description = "   ".to_string();
    assert_eq!(
        check_transaction(&t),
        Err(ValidationError::MissingDescription)
    );

    let mut t = valid_tx();
    t.category = String::new();
    assert_eq!(check_transaction(&t), Err(ValidationError::MissingCategory));
}

#[test]
fn rejects_out_of_range_rule_days() {
    assert_eq!(check_day(0), Err(ValidationError::DayOutOfRange(0)));
    assert_eq!(check_day(32), Err(ValidationError::DayOutOfRange(32)));
    assert!(check_day(1).is_ok());
    assert!(check_day(31).is_ok());

    let mut r = valid_rule();
    r.day = 0;
    assert!(check_rule(&r).is_err());
}

#[test]
fn category_lookup_is_total() {
    let info = category_info("food");
    assert_eq!(info.name, "Food & Dining");
    assert_eq!(info.kind, CategoryKind::Expense);

    let info = category_info("scholarship");
    assert_eq!(info.kind, CategoryKind::Income);

    // Unknown keys degrade to a placeholder instead of erroring
    let info = category_info("crypto-winnings");
    assert_eq!(info.name, "Unknown");
    assert_eq!(info.kind, CategoryKind::Unknown);
}
