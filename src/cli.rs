// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

fn range_args() -> [Arg; 2] {
    [
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Earliest transaction date to include"),
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Latest transaction date to include"),
    ]
}

fn status_arg() -> Arg {
    Arg::new("status")
        .long("status")
        .value_parser(["credit", "debit"])
        .help("credit adds to the balance, debit subtracts")
}

pub fn build_cli() -> Command {
    Command::new("ledgerpad")
        .version(crate_version!())
        .about("Single-user transaction ledger with a running balance")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("LEDGERPAD_DB")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("Path to the ledger database"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(Command::new("init").about("Create the ledger database"))
        .subcommand(
            Command::new("tx")
                .about("Create, edit and list transactions")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("desc").long("desc").help("Free-text description"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(status_arg().required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Transaction date (default: today)"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change fields of an existing transaction")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("desc").long("desc"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(status_arg())
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions and their total")
                        .args(range_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show a single transaction")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("balance")
                .about("Credits, debits and balance")
                .args(range_args())
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Write transactions to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true))
                .args(range_args()),
        )
        .subcommand(
            Command::new("import")
                .about("Replace all transactions with the contents of a file")
                .arg(Arg::new("file").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("csv|json (default: from file extension)"),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored transactions for problems"))
}
