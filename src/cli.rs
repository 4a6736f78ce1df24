// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn index_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .value_parser(value_parser!(usize))
        .help(help)
}

fn tx_field_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("date").long("date").help("YYYY-MM-DD"))
        .arg(Arg::new("description").long("description").short('d'))
        .arg(Arg::new("category").long("category").short('c'))
        .arg(
            Arg::new("kind")
                .long("kind")
                .short('k')
                .value_parser(["income", "expense"]),
        )
        .arg(Arg::new("amount").long("amount").short('a'))
}

pub fn build_cli() -> Command {
    Command::new("homedash")
        .about("Expense ledger, summaries and bookmark grid kept in one JSON snapshot")
        .version(clap::crate_version!())
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .help("Working snapshot file (defaults to the platform data dir)"),
        )
        .subcommand(
            Command::new("init")
                .about("Create the working snapshot")
                .arg(
                    Arg::new("sample")
                        .long("sample")
                        .action(ArgAction::SetTrue)
                        .help("Seed demo transactions when the ledger is empty"),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Ledger rows")
                .subcommand_required(true)
                .subcommand(tx_field_args(
                    Command::new("add").about("Append a row (blank expense dated today)"),
                ))
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Rows with running balance")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32).range(1..=12)),
                        )
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(Arg::new("search").long("search").short('s')),
                ))
                .subcommand(tx_field_args(
                    Command::new("set")
                        .about("Edit fields of one row")
                        .arg(index_arg("index", "Row index as shown by `tx list`")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a row")
                        .arg(index_arg("index", "Row index as shown by `tx list`")),
                ),
        )
        .subcommand(
            Command::new("balance")
                .about("Base bank balance")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("value").required(true).allow_hyphen_values(true)),
                ),
        )
        .subcommand(
            Command::new("bookmark")
                .about("Bookmark grid")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(index_arg("index", "Tile index")))
                .subcommand(
                    Command::new("swap")
                        .about("Exchange two tiles")
                        .arg(index_arg("from", "Dragged tile"))
                        .arg(index_arg("to", "Drop target")),
                )
                .subcommand(
                    Command::new("import")
                        .about("Import a browser bookmark export (HTML)")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived figures")
                .subcommand_required(true)
                .subcommand(json_flags(Command::new("summary")))
                .subcommand(json_flags(Command::new("monthly")))
                .subcommand(json_flags(Command::new("categories")))
                .subcommand(json_flags(Command::new("trend"))),
        )
        .subcommand(
            Command::new("settings")
                .about("User name and wallpaper")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("wallpaper").long("wallpaper")),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("theme")
                .about("Colour theme")
                .subcommand_required(true)
                .subcommand(Command::new("toggle")),
        )
        .subcommand(
            Command::new("save")
                .about("Export the snapshot to a JSON file")
                .arg(Arg::new("out").long("out").short('o')),
        )
        .subcommand(
            Command::new("load")
                .about("Replace the snapshot with a JSON file")
                .arg(Arg::new("path").long("path").required(true)),
        )
}
