// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::aggregate::{budget_progress, budget_status, filter_by_month};
use crate::models::{TxKind, category_info};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("report", sub)) => report(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = store::current_user(conn)?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;

    let mut goals = store::load_budget(conn, &user)?;
    goals.insert(category.clone(), amount);
    store::save_budget(conn, &user, &goals)?;
    println!("Budget goal for {} = {}", category, fmt_money(&amount));
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store::current_user(conn)?;
    let goals = store::load_budget(conn, &user)?;
    if !maybe_print_json(json_flag, jsonl_flag, &goals)? {
        let rows = goals
            .iter()
            .map(|(cat, amt)| {
                vec![
                    category_info(cat).name.to_string(),
                    cat.clone(),
                    fmt_money(amt),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Key", "Monthly goal"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct BudgetRow {
    category: String,
    budgeted: String,
    spent: String,
    progress: String,
    status: &'static str,
}

fn report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap().trim())?;
    let user = store::current_user(conn)?;

    let goals = store::load_budget(conn, &user)?;
    let transactions = store::load_transactions(conn, &user)?;
    let in_month = filter_by_month(&transactions, year, month);

    let mut data = Vec::new();
    for (cat, budgeted) in &goals {
        let spent: Decimal = in_month
            .iter()
            .filter(|t| t.kind == TxKind::Expense && &t.category == cat)
            .map(|t| t.amount)
            .sum();
        let progress = budget_progress(spent, *budgeted);
        let status = budget_status(spent, *budgeted);
        data.push(BudgetRow {
            category: category_info(cat).name.to_string(),
            budgeted: fmt_money(budgeted),
            spent: fmt_money(&spent),
            progress: format!("{:.1}%", progress),
            status: status.as_str(),
        });
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    r.budgeted.clone(),
                    r.spent.clone(),
                    r.progress.clone(),
                    r.status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Budgeted", "Spent", "Progress", "Status"], rows)
        );
    }
    Ok(())
}
