// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parses a "YYYY-MM" month into its (year, month) pair.
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok((first.year(), first.month()))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub const FINANCIAL_TIPS: &[&str] = &[
    "Save first, spend later: Always set aside your savings goal amount as soon as you receive income.",
    "Track every expense: Small purchases add up quickly over time.",
    "Use the 50/30/20 rule: 50% needs, 30% wants, 20% savings.",
    "Avoid taking loans with interest rates above 10% if possible.",
    "Cook at home more often to save money on food expenses.",
    "Compare prices before making purchases, especially for textbooks.",
    "Take advantage of student discounts whenever available.",
    "Build an emergency fund covering at least 3 months of expenses.",
    "Review your spending weekly to stay on track with your budget.",
    "Consider part-time work that doesn't interfere with your studies.",
    "Use budgeting apps to automate your financial tracking.",
    "Set up automatic transfers to your savings account.",
    "Avoid impulse purchases by waiting 24 hours before buying.",
    "Buy used textbooks or rent them to save money.",
    "Use public transportation or walk when possible.",
    "Look for free entertainment options like campus events.",
    "Share streaming subscriptions with friends to split costs.",
    "Start investing small amounts early to build wealth.",
    "Keep receipts and track tax-deductible education expenses.",
    "Create specific savings goals with deadlines to stay motivated.",
];

/// One tip per calendar day, rotating by day-of-month.
pub fn daily_tip(today: NaiveDate) -> &'static str {
    let idx = today.day() as usize % FINANCIAL_TIPS.len();
    FINANCIAL_TIPS[idx]
}
