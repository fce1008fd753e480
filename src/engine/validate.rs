// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Entry-point validation. The scheduler and the aggregation functions
//! assume well-formed records and never re-validate; everything crossing
//! from user input into the stores goes through here first.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{RecurringRule, Transaction};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be greater than 0")]
    NonPositiveAmount,
    #[error("description is required")]
    MissingDescription,
    #[error("category is required")]
    MissingCategory,
    #[error("day must be between 1 and 31, got {0}")]
    DayOutOfRange(u32),
}

pub fn check_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

pub fn check_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    Ok(())
}

pub fn check_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::MissingCategory);
    }
    Ok(())
}

pub fn check_day(day: u32) -> Result<(), ValidationError> {
    if !(1..=31).contains(&day) {
        return Err(ValidationError::DayOutOfRange(day));
    }
    Ok(())
}

pub fn check_transaction(tx: &Transaction) -> Result<(), ValidationError> {
    check_amount(tx.amount)?;
    check_description(&tx.description)?;
    check_category(&tx.category)?;
    Ok(())
}

pub fn check_rule(rule: &RecurringRule) -> Result<(), ValidationError> {
    check_amount(rule.amount)?;
    check_description(&rule.description)?;
    check_category(&rule.category)?;
    check_day(rule.day)?;
    Ok(())
}
