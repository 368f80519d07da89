// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::report::vault_balance;
use crate::store::Store;
use crate::utils::{fmt_brl, parse_decimal};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            store.set_vault_base(amount)?;
            println!("Vault base set to {}", fmt_brl(&amount));
            Ok(true)
        }
        // Bare `vault` behaves like `vault show`.
        _ => {
            let balance = vault_balance(store.vault_base, &store.transactions);
            println!(
                "Cofre: {} (base {})",
                fmt_brl(&balance),
                fmt_brl(&store.vault_base)
            );
            Ok(false)
        }
    }
}
