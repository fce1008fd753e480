// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryKind, category_info};
use crate::store;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let user = store::current_user(conn)?;
    let transactions = store::load_transactions(conn, &user)?;
    let banks = store::load_banks(conn, &user)?;
    let rules = store::load_recurring(conn, &user)?;

    let mut rows = Vec::new();

    // 1) Transactions or rules pointing at banks that do not exist
    for t in &transactions {
        if !banks.iter().any(|b| b.id == t.bank_id) {
            rows.push(vec!["tx_unknown_bank".into(), format!("{} -> {}", t.id, t.bank_id)]);
        }
    }
    for r in &rules {
        if !banks.iter().any(|b| b.id == r.bank_id) {
            rows.push(vec!["rule_unknown_bank".into(), format!("{} -> {}", r.id, r.bank_id)]);
        }
    }

    // 2) Category keys outside the fixed table (they still aggregate, under Unknown)
    for t in &transactions {
        if category_info(&t.category).kind == CategoryKind::Unknown {
            rows.push(vec!["unknown_category".into(), format!("{} '{}'", t.id, t.category)]);
        }
    }

    // 3) Rules with out-of-range days or non-positive amounts
    for r in &rules {
        if !(1..=31).contains(&r.day) {
            rows.push(vec!["rule_day_out_of_range".into(), format!("{} day={}", r.id, r.day)]);
        }
        if r.amount <= Decimal::ZERO {
            rows.push(vec!["rule_bad_amount".into(), format!("{} {}", r.id, r.amount)]);
        }
    }

    // 4) Stored transactions with non-positive amounts
    for t in &transactions {
        if t.amount <= Decimal::ZERO {
            rows.push(vec!["tx_bad_amount".into(), format!("{} {}", t.id, t.amount)]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
