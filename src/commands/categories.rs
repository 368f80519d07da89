// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ai::{self, SuggestClient, SuggestionTracker};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            let color = sub.get_one::<String>("color").unwrap().trim().to_string();
            let id = store.add_category(name.clone(), color)?;
            println!("Added category '{}' [id {}]", name, id);
            Ok(true)
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.edit_category(
                id,
                sub.get_one::<String>("name").map(|s| s.to_string()),
                sub.get_one::<String>("color").map(|s| s.to_string()),
            )?;
            println!("Updated category {}", id);
            Ok(true)
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.delete_category(id);
            println!("Removed category {}", id);
            Ok(true)
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &store.categories)? {
                let rows: Vec<Vec<String>> = store
                    .categories
                    .iter()
                    .map(|c| vec![c.id.clone(), c.name.clone(), c.color.clone()])
                    .collect();
                println!("{}", pretty_table(&["ID", "Nome", "Cor"], rows));
            }
            Ok(false)
        }
        Some(("suggest", sub)) => {
            suggest(store, sub)?;
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn suggest(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let available: Vec<String> = store.categories.iter().map(|c| c.name.clone()).collect();
    let client = SuggestClient::from_env()?;
    let mut tracker = SuggestionTracker::new();
    let token = tracker.begin();
    let raw = client.suggest(description, &available)?;
    let Some(suggestions) = ai::apply_suggestions(&tracker, token, raw, &available) else {
        return Ok(());
    };
    if suggestions.is_empty() {
        println!("No matching categories suggested.");
    } else {
        for name in suggestions {
            println!("{}", name);
        }
    }
    Ok(())
}
