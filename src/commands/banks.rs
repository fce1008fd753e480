// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Bank;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = store::current_user(conn)?;
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let kind = sub.get_one::<String>("type").unwrap().trim().to_string();
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap().trim())?;
    let color = sub.get_one::<String>("color").unwrap().trim().to_string();
    let id = sub
        .get_one::<String>("id")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let mut banks = store::load_banks(conn, &user)?;
    if banks.iter().any(|b| b.id == id) {
        return Err(anyhow!("Bank '{}' already exists", id));
    }
    banks.push(Bank {
        id: id.clone(),
        name: name.clone(),
        kind: kind.clone(),
        balance,
        color,
    });
    store::save_banks(conn, &user, &banks)?;
    println!("Added bank '{}' ({}, id: {})", name, kind, id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store::current_user(conn)?;
    let banks = store::load_banks(conn, &user)?;
    if !maybe_print_json(json_flag, jsonl_flag, &banks)? {
        let rows = banks
            .iter()
            .map(|b| {
                vec![
                    b.id.clone(),
                    b.name.clone(),
                    b.kind.clone(),
                    fmt_money(&b.balance),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Name", "Type", "Balance"], rows));
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = store::current_user(conn)?;
    let id = sub.get_one::<String>("id").unwrap().trim();
    let mut banks = store::load_banks(conn, &user)?;
    let before = banks.len();
    banks.retain(|b| b.id != id);
    if banks.len() == before {
        return Err(anyhow!("Bank '{}' not found", id));
    }
    store::save_banks(conn, &user, &banks)?;
    println!("Removed bank '{}'", id);
    Ok(())
}
