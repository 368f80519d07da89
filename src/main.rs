// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use sgbr::{cli, commands, snapshot};

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = snapshot::load_or_init()?;

    let mutated = match matches.subcommand() {
        Some(("init", sub)) => {
            let path = snapshot::snapshot_path()?;
            if store.is_empty() || sub.get_flag("force") {
                snapshot::seed_demo(&mut store)?;
                println!("Snapshot seeded at {}", path.display());
                true
            } else {
                println!(
                    "Snapshot at {} already has data (use --force to reseed)",
                    path.display()
                );
                false
            }
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut store, sub)?,
        Some(("collab", sub)) => commands::collaborators::handle(&mut store, sub)?,
        Some(("skill", sub)) => commands::skills::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut store, sub)?,
        Some(("dashboard", sub)) => {
            commands::dashboard::handle(&store, sub)?;
            false
        }
        Some(("vault", sub)) => commands::vault::handle(&mut store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
            false
        }
    };

    // Read-only commands leave the snapshot untouched.
    if mutated {
        snapshot::save(&store)?;
    }
    Ok(())
}
