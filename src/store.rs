// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

use crate::models::{Bank, BudgetGoals, RecurringRule, Transaction};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketledger", "pocketledger"));

pub const DEFAULT_USER: &str = "local";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pocketledger.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = store_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open store at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- One JSON document per (user, entity), the entity being one of
    -- 'transactions', 'banks', 'recurring', 'budget'.
    CREATE TABLE IF NOT EXISTS records(
        user TEXT NOT NULL,
        entity TEXT NOT NULL,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now')),
        PRIMARY KEY(user, entity)
    );
    "#,
    )?;
    Ok(())
}

pub fn current_user(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='current_user'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v.unwrap_or_else(|| DEFAULT_USER.to_string()))
}

pub fn set_current_user(conn: &Connection, user: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('current_user', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![user],
    )?;
    Ok(())
}

/// Loads one entity document for a user. A missing row or an undecodable
/// payload yields the supplied default instead of an error, matching the
/// load-or-default contract the rest of the app relies on.
pub fn load_entity<T: DeserializeOwned>(
    conn: &Connection,
    user: &str,
    entity: &str,
    default: T,
) -> Result<T> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM records WHERE user=?1 AND entity=?2",
            params![user, entity],
            |r| r.get(0),
        )
        .optional()?;
    match raw {
        Some(s) => Ok(serde_json::from_str(&s).unwrap_or(default)),
        None => Ok(default),
    }
}

pub fn save_entity<T: Serialize>(
    conn: &Connection,
    user: &str,
    entity: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Serialize '{}' for user '{}'", entity, user))?;
    conn.execute(
        "INSERT INTO records(user, entity, value, updated_at)
         VALUES (?1, ?2, ?3, datetime('now'))
         ON CONFLICT(user, entity) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
        params![user, entity, raw],
    )?;
    Ok(())
}

pub fn load_transactions(conn: &Connection, user: &str) -> Result<Vec<Transaction>> {
    load_entity(conn, user, "transactions", Vec::new())
}

/// A fresh user starts with the default main account.
pub fn load_banks(conn: &Connection, user: &str) -> Result<Vec<Bank>> {
    load_entity(conn, user, "banks", vec![Bank::main_default()])
}

pub fn load_recurring(conn: &Connection, user: &str) -> Result<Vec<RecurringRule>> {
    load_entity(conn, user, "recurring", Vec::new())
}

pub fn load_budget(conn: &Connection, user: &str) -> Result<BudgetGoals> {
    load_entity(conn, user, "budget", BudgetGoals::new())
}

pub fn save_transactions(conn: &Connection, user: &str, v: &[Transaction]) -> Result<()> {
    save_entity(conn, user, "transactions", &v)
}

pub fn save_banks(conn: &Connection, user: &str, v: &[Bank]) -> Result<()> {
    save_entity(conn, user, "banks", &v)
}

pub fn save_recurring(conn: &Connection, user: &str, v: &[RecurringRule]) -> Result<()> {
    save_entity(conn, user, "recurring", &v)
}

pub fn save_budget(conn: &Connection, user: &str, v: &BudgetGoals) -> Result<()> {
    save_entity(conn, user, "budget", v)
}

/// Persists ledger, banks, and recurrence cursors as one sqlite transaction
/// so a scheduler pass can never land partially (balance moved but cursor
/// not advanced, or the reverse).
pub fn save_snapshot(
    conn: &mut Connection,
    user: &str,
    transactions: &[Transaction],
    banks: &[Bank],
    recurring: &[RecurringRule],
) -> Result<()> {
    let tx = conn.transaction()?;
    save_entity(&tx, user, "transactions", &transactions)?;
    save_entity(&tx, user, "banks", &banks)?;
    save_entity(&tx, user, "recurring", &recurring)?;
    tx.commit()?;
    Ok(())
}
