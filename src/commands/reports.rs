// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::aggregate::{
    filter_by_month, financial_status, group_by_category, savings_rate, totals_by_type,
};
use crate::models::{Transaction, TxKind, category_info};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("by-category", sub)) => by_category(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn month_scope<'a>(
    transactions: &'a [Transaction],
    sub: &clap::ArgMatches,
) -> Result<Vec<&'a Transaction>> {
    match sub.get_one::<String>("month") {
        Some(s) => {
            let (year, month) = parse_month(s.trim())?;
            Ok(filter_by_month(transactions, year, month))
        }
        None => Ok(transactions.iter().collect()),
    }
}

#[derive(Serialize)]
struct Summary {
    income: String,
    expense: String,
    net: String,
    savings_rate: String,
    status: &'static str,
    message: &'static str,
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store::current_user(conn)?;
    let transactions = store::load_transactions(conn, &user)?;
    let scoped: Vec<Transaction> = month_scope(&transactions, sub)?
        .into_iter()
        .cloned()
        .collect();

    let totals = totals_by_type(&scoped);
    let rate = savings_rate(totals.income, totals.expense);
    let health = financial_status(totals.income, totals.expense);

    let out = Summary {
        income: fmt_money(&totals.income),
        expense: fmt_money(&totals.expense),
        net: fmt_money(&totals.net),
        savings_rate: format!("{:.1}%", rate),
        status: health.status.as_str(),
        message: health.message,
    };

    if !maybe_print_json(json_flag, jsonl_flag, &out)? {
        let rows = vec![
            vec!["Income".to_string(), out.income.clone()],
            vec!["Expense".to_string(), out.expense.clone()],
            vec!["Net".to_string(), out.net.clone()],
            vec!["Savings rate".to_string(), out.savings_rate.clone()],
            vec!["Status".to_string(), out.status.to_string()],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
        println!("{}", out.message);
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    category: String,
    key: String,
    icon: String,
    count: usize,
    total: String,
}

fn by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = sub.get_one::<String>("type").map(|s| match s.as_str() {
        "income" => TxKind::Income,
        _ => TxKind::Expense,
    });
    let user = store::current_user(conn)?;
    let transactions = store::load_transactions(conn, &user)?;
    let scoped: Vec<Transaction> = month_scope(&transactions, sub)?
        .into_iter()
        .filter(|t| kind.is_none_or(|k| t.kind == k))
        .cloned()
        .collect();

    let groups = group_by_category(&scoped);
    let data: Vec<CategoryRow> = groups
        .iter()
        .map(|g| {
            let info = category_info(&g.category);
            CategoryRow {
                category: info.name.to_string(),
                key: g.category.clone(),
                icon: info.icon.to_string(),
                count: g.count,
                total: fmt_money(&g.total),
            }
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    format!("{} {}", r.icon, r.category),
                    r.key.clone(),
                    r.count.to_string(),
                    r.total.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Key", "Count", "Total"], rows)
        );
    }
    Ok(())
}
