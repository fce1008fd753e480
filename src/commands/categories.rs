// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CATEGORIES, CategoryKind};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(sub)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    key: &'static str,
    name: &'static str,
    icon: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<CategoryRow> = CATEGORIES
        .iter()
        .map(|c| CategoryRow {
            key: c.key,
            name: c.name,
            icon: c.icon,
            kind: match c.kind {
                CategoryKind::Income => "income",
                CategoryKind::Expense => "expense",
                CategoryKind::Unknown => "unknown",
            },
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|c| {
                vec![
                    c.key.to_string(),
                    format!("{} {}", c.icon, c.name),
                    c.kind.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Key", "Category", "Type"], rows));
    }
    Ok(())
}
