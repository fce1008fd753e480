// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{recurring, validate};
use crate::models::{Frequency, MAIN_BANK_ID, RecurringRule, TxKind};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Result, anyhow};
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("enable", sub)) => set_active(conn, sub, true)?,
        Some(("disable", sub)) => set_active(conn, sub, false)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("process", sub)) => process(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
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
    let day = *sub.get_one::<u32>("day").unwrap();
    let bank_id = sub
        .get_one::<String>("bank")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| MAIN_BANK_ID.to_string());

    let rule = RecurringRule {
        id: uuid::Uuid::new_v4().to_string(),
        active: true,
        frequency: Frequency::Monthly,
        day,
        amount,
        kind,
        category,
        description: description.clone(),
        bank_id,
        last_processed: None,
    };
    validate::check_rule(&rule)?;

    let mut rules = store::load_recurring(conn, &user)?;
    rules.push(rule);
    store::save_recurring(conn, &user, &rules)?;
    println!(
        "Added monthly {} '{}' of {} due on day {}",
        kind.as_str(),
        description,
        fmt_money(&amount),
        day
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store::current_user(conn)?;
    let rules = store::load_recurring(conn, &user)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rules)? {
        let rows = rules
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    if r.active { "active" } else { "inactive" }.to_string(),
                    r.kind.as_str().to_string(),
                    fmt_money(&r.amount),
                    r.category.clone(),
                    r.day.to_string(),
                    r.last_processed
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "never".to_string()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Status", "Type", "Amount", "Category", "Day", "Last processed"],
                rows
            )
        );
    }
    Ok(())
}

fn set_active(conn: &Connection, sub: &clap::ArgMatches, active: bool) -> Result<()> {
    let user = store::current_user(conn)?;
    let id = sub.get_one::<String>("id").unwrap().trim();
    let mut rules = store::load_recurring(conn, &user)?;
    let rule = rules
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow!("Recurring item '{}' not found", id))?;
    rule.active = active;
    store::save_recurring(conn, &user, &rules)?;
    println!(
        "Recurring item '{}' is now {}",
        id,
        if active { "active" } else { "inactive" }
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = store::current_user(conn)?;
    let id = sub.get_one::<String>("id").unwrap().trim();
    let mut rules = store::load_recurring(conn, &user)?;
    let before = rules.len();
    rules.retain(|r| r.id != id);
    if rules.len() == before {
        return Err(anyhow!("Recurring item '{}' not found", id));
    }
    store::save_recurring(conn, &user, &rules)?;
    println!("Removed recurring item '{}'", id);
    Ok(())
}

fn process(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = store::current_user(conn)?;
    let today = match sub.get_one::<String>("today") {
        Some(s) => parse_date(s.trim())?,
        None => Utc::now().date_naive(),
    };

    let transactions = store::load_transactions(conn, &user)?;
    let banks = store::load_banks(conn, &user)?;
    let rules = store::load_recurring(conn, &user)?;

    let outcome = recurring::process_due_rules(&rules, &banks, today);
    if !outcome.any_processed {
        println!("No recurring items due on {}", today);
        return Ok(());
    }

    let added = outcome.new_transactions.len();
    let mut ledger = outcome.new_transactions;
    ledger.extend(transactions);
    store::save_snapshot(conn, &user, &ledger, &outcome.banks, &outcome.rules)?;

    println!("New recurring transactions have been added automatically");
    println!("Processed {} recurring item(s) as of {}", added, today);
    Ok(())
}
