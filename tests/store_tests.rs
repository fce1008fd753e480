// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::engine::recurring::process_due_rules;
use pocketledger::models::{Bank, Frequency, RecurringRule, TxKind};
use pocketledger::store;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE settings(key TEXT PRIMARY KEY, value TEXT NOT NULL);
        CREATE TABLE records(
            user TEXT NOT NULL,
            entity TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY(user, entity)
        );
        "#,
    )
    .unwrap();
    conn
}

fn sample_rule() -> RecurringRule {
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
fn missing_rows_fall_back_to_defaults() {
    let conn = setup();
    assert!(store::load_transactions(&conn, "alice").unwrap().is_empty());
    assert!(store::load_recurring(&conn, "alice").unwrap().is_empty());
    assert!(store::load_budget(&conn, "alice").unwrap().is_empty());

    // A fresh user starts with the seeded main account
    let banks = store::load_banks(&conn, "alice").unwrap();
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].id, "main");
    assert_eq!(banks[0].name, "Main Account");
    assert_eq!(banks[0].balance, Decimal::ZERO);
}

#[test]
fn undecodable_payload_falls_back_to_default() {
    let conn = setup();
    conn.execute(
        "INSERT INTO records(user, entity, value) VALUES('alice','transactions','not json')",
        [],
    )
    .unwrap();
    assert!(store::load_transactions(&conn, "alice").unwrap().is_empty());
}

#[test]
fn entities_round_trip_per_user() {
    let conn = setup();
    let rules = vec![sample_rule()];
    store::save_recurring(&conn, "alice", &rules).unwrap();

    let loaded = store::load_recurring(&conn, "alice").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "r1");
    assert_eq!(loaded[0].amount, Decimal::from(50));
    assert_eq!(loaded[0].frequency, Frequency::Monthly);

    // Other users are not affected
    assert!(store::load_recurring(&conn, "bob").unwrap().is_empty());
}

#[test]
fn unknown_frequency_in_stored_data_stays_inert() {
    let conn = setup();
    let raw = r#"[{"id":"r9","active":true,"frequency":"weekly","day":3,
        "amount":"10","type":"expense","category":"food",
        "description":"Snacks","bankId":"main"}]"#;
    conn.execute(
        "INSERT INTO records(user, entity, value) VALUES('alice','recurring',?1)",
        [raw],
    )
    .unwrap();

    let rules = store::load_recurring(&conn, "alice").unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].frequency, Frequency::Unsupported);

    let out = process_due_rules(
        &rules,
        &[Bank::main_default()],
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
    );
    assert!(out.new_transactions.is_empty());
}

#[test]
fn snapshot_saves_all_three_entities_together() {
    let mut conn = setup();
    let rules = vec![sample_rule()];
    let banks = vec![Bank {
        balance: Decimal::from(1000),
        ..Bank::main_default()
    }];
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    let out = process_due_rules(&rules, &banks, today);
    store::save_snapshot(&mut conn, "alice", &out.new_transactions, &out.banks, &out.rules)
        .unwrap();

    let txns = store::load_transactions(&conn, "alice").unwrap();
    let banks = store::load_banks(&conn, "alice").unwrap();
    let rules = store::load_recurring(&conn, "alice").unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(banks[0].balance, Decimal::from(950));
    assert_eq!(rules[0].last_processed, Some(today));
}

#[test]
fn current_user_defaults_and_persists() {
    let conn = setup();
    assert_eq!(store::current_user(&conn).unwrap(), "local");
    store::set_current_user(&conn, "alice").unwrap();
    assert_eq!(store::current_user(&conn).unwrap(), "alice");
}

#[test]
fn store_opens_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocketledger.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE records(user TEXT NOT NULL, entity TEXT NOT NULL, value TEXT NOT NULL,
         updated_at TEXT NOT NULL DEFAULT (datetime('now')), PRIMARY KEY(user, entity));",
    )
    .unwrap();
    store::save_recurring(&conn, "alice", &[sample_rule()]).unwrap();
    drop(conn);

    let conn = Connection::open(&path).unwrap();
    assert_eq!(store::load_recurring(&conn, "alice").unwrap().len(), 1);
}
