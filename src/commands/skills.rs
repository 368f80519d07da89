// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            let id = store.add_skill(name.clone())?;
            println!("Added skill '{}' [id {}]", name, id);
            Ok(true)
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.edit_skill(id, sub.get_one::<String>("name").map(|s| s.to_string()))?;
            println!("Updated skill {}", id);
            Ok(true)
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.delete_skill(id);
            println!("Removed skill {}", id);
            Ok(true)
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &store.skills)? {
                let rows: Vec<Vec<String>> = store
                    .skills
                    .iter()
                    .map(|s| vec![s.id.clone(), s.name.clone()])
                    .collect();
                println!("{}", pretty_table(&["ID", "Nome"], rows));
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}
