// Copyright (c) SGBR.
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
    Command::new("sgbr")
        .about("Small-business revenue/expense tracking, team roster, and reporting")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(
            Command::new("init").about("Create the snapshot with demo seed data").arg(
                Arg::new("force")
                    .long("force")
                    .action(ArgAction::SetTrue)
                    .help("Overwrite a non-empty snapshot"),
            ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a revenue or expense")
                        .arg(Arg::new("type").long("type").required(true).help("revenue|expense"))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true).help("Category id"))
                        .arg(
                            Arg::new("collaborator")
                                .long("collaborator")
                                .required(true)
                                .help("Collaborator id"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD [HH:MM], defaults to now"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a transaction in place (no-op for unknown ids)")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("collaborator").long("collaborator"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(Arg::new("from").long("from").help("YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("reset-expenses").about("Remove every expense transaction"),
                )
                .subcommand(
                    Command::new("export")
                        .about("Export the transactions view as CSV")
                        .arg(Arg::new("out").long("out").help("Output path")),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .required(true)
                                .help("6-digit hex, e.g. #3b82f6"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("color").long("color")),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("suggest")
                        .about("Ask the suggestion service for matching categories")
                        .arg(Arg::new("description").long("description").required(true)),
                ),
        )
        .subcommand(
            Command::new("collab")
                .about("Manage the collaborator roster")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("role").long("role").required(true))
                        .arg(Arg::new("avatar").long("avatar").help("Avatar URL"))
                        .arg(
                            Arg::new("skill")
                                .long("skill")
                                .action(ArgAction::Append)
                                .help("Skill id (repeatable)"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("role").long("role"))
                        .arg(Arg::new("avatar").long("avatar"))
                        .arg(Arg::new("skill").long("skill").action(ArgAction::Append)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("sync").about("Replace the roster with the remote benneiros"),
                )
                .subcommand(
                    Command::new("push")
                        .about("Publish a local collaborator to the remote API")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("update")
                                .long("update")
                                .action(ArgAction::SetTrue)
                                .help("PUT an existing remote record instead of POSTing"),
                        ),
                )
                .subcommand(
                    Command::new("remote-rm")
                        .about("Delete a collaborator on the remote API")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("skill")
                .about("Manage skills")
                .subcommand(Command::new("add").arg(Arg::new("name").long("name").required(true)))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name")),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("report")
                .about("Joined report views and CSV export")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("page")
                                .long("page")
                                .value_parser(value_parser!(usize))
                                .help("Page number (5 per page)"),
                        )
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Ignore pagination"),
                        ),
                ))
                .subcommand(
                    Command::new("export")
                        .about("Export the report view as CSV")
                        .arg(Arg::new("out").long("out").help("Output path"))
                        .arg(
                            Arg::new("recent")
                                .long("recent")
                                .action(ArgAction::SetTrue)
                                .help("Only the trailing 30 days"),
                        ),
                )
                .subcommand(
                    Command::new("fetch")
                        .about("Replace local data with the remote relatorios and roster"),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Totals, daily average, vault, monthly chart, team")
                .arg(Arg::new("from").long("from").help("YYYY-MM-DD"))
                .arg(Arg::new("to").long("to").help("YYYY-MM-DD")),
        ))
        .subcommand(
            Command::new("vault")
                .about("Derived running balance (base minus expenses)")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set").arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
}
