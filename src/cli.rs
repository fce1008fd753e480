// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Student money tracker: transactions, banks, budgets, recurring items")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(
            Command::new("user")
                .about("Select which user's ledger to operate on")
                .subcommand(
                    Command::new("set")
                        .about("Set the current user id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(Command::new("show").about("Show the current user id")),
        )
        .subcommand(
            Command::new("bank")
                .about("Manage bank accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add a bank account")
                        .arg(Arg::new("id").long("id").help("Account id (defaults to a generated one)"))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("savings")
                                .help("Free-form label, e.g. savings, cash, mobile"),
                        )
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .default_value("0")
                                .help("Initial seed balance"),
                        )
                        .arg(Arg::new("color").long("color").default_value("#4f46e5")),
                )
                .subcommand(json_flags(Command::new("list").about("List bank accounts")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a bank account")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("bank").long("bank").help("Bank account id (default: main)"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default: today)"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    json_flags(Command::new("list").about("List transactions, most recent first"))
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("bank").long("bank"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ),
        )
        .subcommand(
            Command::new("recurring")
                .about("Manage recurring transactions")
                .subcommand(
                    Command::new("add")
                        .about("Add a monthly recurring item")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("day")
                                .long("day")
                                .required(true)
                                .value_parser(value_parser!(u32))
                                .help("Day of month (1-31) the item is due"),
                        )
                        .arg(Arg::new("bank").long("bank").help("Bank account id (default: main)")),
                )
                .subcommand(json_flags(Command::new("list").about("List recurring items")))
                .subcommand(
                    Command::new("enable")
                        .about("Activate a recurring item")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("disable")
                        .about("Deactivate a recurring item")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a recurring item")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("process")
                        .about("Materialize all due recurring items")
                        .arg(
                            Arg::new("today")
                                .long("today")
                                .help("Evaluate as of this date, YYYY-MM-DD (default: today)"),
                        ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budget goals per category")
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly goal for a category")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List budget goals")))
                .subcommand(
                    json_flags(Command::new("report").about("Spending vs. goals for a month"))
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries over the ledger")
                .subcommand(
                    json_flags(
                        Command::new("summary")
                            .about("Income, expense, net, savings rate, financial status"),
                    )
                    .arg(Arg::new("month").long("month").help("YYYY-MM (default: all time)")),
                )
                .subcommand(
                    json_flags(Command::new("by-category").about("Totals grouped by category"))
                        .arg(Arg::new("month").long("month").help("YYYY-MM (default: all time)"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        ),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("The fixed category table")
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(Command::new("tip").about("Show today's financial tip"))
        .subcommand(Command::new("doctor").about("Check the stored data for inconsistencies"))
}
