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
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("gastos")
        .version(clap::crate_version!())
        .about("Track income and expenses, see your balance, export and import your data")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("GASTOS_DB")
                .value_name("PATH")
                .help("Storage file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the storage file and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income (positive) or expense (negative)")
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .short('a')
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("rm").about("Delete one transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("Show transactions, balance and chart"),
                ))
                .subcommand(
                    Command::new("clear")
                        .about("Delete every transaction")
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views")
                .subcommand(Command::new("balance").about("Current balance"))
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expense and available balance"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write transactions to a CSV or JSON file")
                .arg(Arg::new("format").long("format").short('f').default_value("csv"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output path (defaults to transacciones.csv / transacciones.json)"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Replace all transactions with the contents of a JSON export")
                .arg(Arg::new("path").long("path").short('p').required(true)),
        )
        .subcommand(
            Command::new("theme")
                .about("Colour theme preference")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set").arg(
                        Arg::new("theme")
                            .required(true)
                            .value_parser(["dark", "light"]),
                    ),
                )
                .subcommand(Command::new("toggle")),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
