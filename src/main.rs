// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use pocketledger::{cli, commands, store, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut conn = store::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::store_path()?.display());
        }
        Some(("user", sub)) => commands::session::handle(&conn, sub)?,
        Some(("bank", sub)) => commands::banks::handle(&conn, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut conn, sub)?,
        Some(("recurring", sub)) => commands::recurring::handle(&mut conn, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("tip", _)) => {
            println!("{}", utils::daily_tip(Utc::now().date_naive()));
        }
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
