// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::validate;
use crate::models::{MAIN_BANK_ID, Origin, Transaction, TxKind, category_info};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
use anyhow::Result;
use chrono::{Datelike, Utc};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = store::current_user(conn)?;
    let kind = match sub.get_one::<String>("type").unwrap().as_str() {
        "income" => TxKind::Income,
        _ => TxKind::Expense,
    };
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let description = sub
        .get_one::<String>("description")
        .unwrap()
        .trim()
        .to_string();
    let bank_id = sub
        .get_one::<String>("bank")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| MAIN_BANK_ID.to_string());
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s.trim())?,
        None => Utc::now().date_naive(),
    };
    let notes = sub.get_one::<String>("notes").map(|s| s.to_string());

    let tx = Transaction {
        id: uuid::Uuid::new_v4().to_string(),
        kind,
        amount,
        category,
        bank_id: bank_id.clone(),
        date,
        description: description.clone(),
        notes,
        timestamp: Utc::now(),
        origin: Origin::Manual,
    };
    validate::check_transaction(&tx)?;

    let mut transactions = store::load_transactions(conn, &user)?;
    let mut banks = store::load_banks(conn, &user)?;
    let recurring = store::load_recurring(conn, &user)?;

    // Ledger is kept most-recent-first.
    transactions.insert(0, tx);
    let delta = match kind {
        TxKind::Income => amount,
        TxKind::Expense => -amount,
    };
    match banks.iter_mut().find(|b| b.id == bank_id) {
        Some(bank) => bank.balance += delta,
        // The record is kept even when its bank is unknown; only the
        // balance update is skipped.
        None => println!("Note: bank '{}' not found, balance unchanged", bank_id),
    }

    store::save_snapshot(conn, &user, &transactions, &banks, &recurring)?;
    println!(
        "Recorded {} {} '{}' on {}",
        kind.as_str(),
        fmt_money(&amount),
        description,
        date
    );
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub bank: String,
    pub description: String,
    pub notes: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let user = store::current_user(conn)?;
    let transactions = store::load_transactions(conn, &user)?;

    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s.trim()))
        .transpose()?;
    let category = sub.get_one::<String>("category").map(|s| s.trim());
    let bank = sub.get_one::<String>("bank").map(|s| s.trim());
    let limit = sub.get_one::<usize>("limit").copied();

    let mut selected: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| match month {
            Some((y, mo)) => t.date.year() == y && t.date.month() == mo,
            None => true,
        })
        .filter(|t| category.is_none_or(|c| t.category == c))
        .filter(|t| bank.is_none_or(|b| t.bank_id == b))
        .collect();
    selected.sort_by(|a, b| (b.date, b.timestamp).cmp(&(a.date, a.timestamp)));
    if let Some(n) = limit {
        selected.truncate(n);
    }

    Ok(selected
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.as_str().to_string(),
            amount: fmt_money(&t.amount),
            category: category_info(&t.category).name.to_string(),
            bank: t.bank_id.clone(),
            description: t.description.clone(),
            notes: t.notes.clone().unwrap_or_default(),
        })
        .collect())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.bank.clone(),
                    r.description.clone(),
                    r.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Amount", "Category", "Bank", "Description", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}
