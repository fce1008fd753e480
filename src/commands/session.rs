// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            store::set_current_user(conn, id)?;
            println!("Current user set to '{}'", id);
        }
        Some(("show", _)) => {
            println!("{}", store::current_user(conn)?);
        }
        _ => {}
    }
    Ok(())
}
