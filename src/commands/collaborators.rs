// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::{ApiClient, NewBenneiro, collaborators_from_benneiros, fetch_or_empty};
use crate::store::{CollaboratorPatch, Store};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            let role = sub.get_one::<String>("role").unwrap().trim().to_string();
            let avatar = sub.get_one::<String>("avatar").map(|s| s.to_string());
            let skills: Vec<String> = sub
                .get_many::<String>("skill")
                .map(|vals| vals.map(|s| s.to_string()).collect())
                .unwrap_or_default();
            let id = store.add_collaborator(name.clone(), role.clone(), avatar, skills)?;
            println!("Added collaborator '{}' ({}) [id {}]", name, role, id);
            Ok(true)
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let patch = CollaboratorPatch {
                name: sub.get_one::<String>("name").map(|s| s.to_string()),
                role: sub.get_one::<String>("role").map(|s| s.to_string()),
                avatar_url: sub
                    .get_one::<String>("avatar")
                    .map(|s| Some(s.to_string())),
                skills: sub
                    .get_many::<String>("skill")
                    .map(|vals| vals.map(|s| s.to_string()).collect()),
            };
            store.edit_collaborator(id, patch)?;
            println!("Updated collaborator {}", id);
            Ok(true)
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.delete_collaborator(id);
            println!("Removed collaborator {}", id);
            Ok(true)
        }
        Some(("list", sub)) => {
            list(store, sub)?;
            Ok(false)
        }
        Some(("sync", _)) => {
            sync(store)?;
            Ok(true)
        }
        // push/remote-rm change the remote, not the local store.
        Some(("push", sub)) => {
            push(store, sub)?;
            Ok(false)
        }
        Some(("remote-rm", sub)) => {
            let id: i64 = sub
                .get_one::<String>("id")
                .unwrap()
                .parse()
                .context("Remote ids are numeric")?;
            ApiClient::from_env()?.delete_benneiro(id)?;
            println!("Removed remote collaborator {}", id);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &store.collaborators)? {
        let rows: Vec<Vec<String>> = store
            .collaborators
            .iter()
            .map(|c| {
                let skills = c
                    .skills
                    .iter()
                    .map(|id| store.skill_name(id).unwrap_or(id).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![c.id.clone(), c.name.clone(), c.role.clone(), skills]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Nome", "Cargo", "Skills"], rows));
    }
    Ok(())
}

fn sync(store: &mut Store) -> Result<()> {
    let client = ApiClient::from_env()?;
    let benneiros = fetch_or_empty("benneiros", client.list_benneiros());
    let roster = collaborators_from_benneiros(benneiros);
    let count = roster.len();
    store.replace_collaborators(roster);
    println!("Synced {} collaborator(s) from the remote roster", count);
    Ok(())
}

fn push(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let local = store
        .collaborators
        .iter()
        .find(|c| c.id == *id)
        .with_context(|| format!("Collaborator '{}' not found", id))?;
    let body = NewBenneiro {
        nome: local.name.clone(),
        cargo: local.role.clone(),
        foto_perfil: local.avatar_url.clone(),
    };
    let client = ApiClient::from_env()?;
    if sub.get_flag("update") {
        let remote_id: i64 = id.parse().context("Remote ids are numeric")?;
        let updated = client.update_benneiro(remote_id, &body)?;
        println!("Updated remote collaborator {}", updated.id);
    } else {
        let created = client.create_benneiro(&body)?;
        println!("Created remote collaborator {}", created.id);
    }
    Ok(())
}
