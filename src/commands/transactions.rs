// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::export;
use crate::models::TransactionKind;
use crate::report;
use crate::store::{NewTransaction, Store, TransactionPatch};
use crate::utils::{fmt_brl, maybe_print_json, parse_date, parse_datetime, parse_decimal, pretty_table};

/// Returns whether the store changed, so the caller knows to save.
pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(store, sub)?;
            Ok(true)
        }
        Some(("edit", sub)) => {
            edit(store, sub)?;
            Ok(true)
        }
        Some(("list", sub)) => {
            list(store, sub)?;
            Ok(false)
        }
        Some(("reset-expenses", _)) => {
            let removed = store.reset_expenses();
            println!("Removed {} expense transaction(s)", removed);
            Ok(true)
        }
        Some(("export", sub)) => {
            export_csv(store, sub)?;
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionKind = sub.get_one::<String>("type").unwrap().parse()?;
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category_id = sub.get_one::<String>("category").unwrap().to_string();
    let collaborator_id = sub.get_one::<String>("collaborator").unwrap().to_string();
    let date = sub
        .get_one::<String>("date")
        .map(|s| parse_datetime(s))
        .transpose()?;

    let id = store.add_transaction(NewTransaction {
        kind,
        description: description.clone(),
        amount,
        date,
        category_id,
        collaborator_id,
    })?;
    println!("Recorded {} '{}' ({}) [id {}]", kind.label(), description, fmt_brl(&amount), id);
    Ok(())
}

fn edit(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = TransactionPatch {
        kind: sub
            .get_one::<String>("type")
            .map(|s| s.parse())
            .transpose()?,
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_datetime(s))
            .transpose()?,
        category_id: sub.get_one::<String>("category").map(|s| s.to_string()),
        collaborator_id: sub.get_one::<String>("collaborator").map(|s| s.to_string()),
    };
    store.edit_transaction(id, patch)?;
    println!("Updated transaction {}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filtered = if let Some(from) = sub.get_one::<String>("from") {
        let from = parse_date(from)?;
        let to = sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?;
        report::filter_by_date_range(&store.transactions, from, to)
    } else {
        store.transactions.clone()
    };

    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(filtered.len());
    Ok(filtered
        .iter()
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.format("%d/%m/%Y %H:%M").to_string(),
            description: t.description.clone(),
            category: store.category_label(&t.category_id).to_string(),
            amount: format!("{}{}", t.kind.sign(), fmt_brl(&t.amount)),
        })
        .collect())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Data", "Descrição", "Categoria", "Valor"], rows)
        );
    }
    Ok(())
}

fn export_csv(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub
        .get_one::<String>("out")
        .map(|s| s.as_str())
        .unwrap_or(export::TRANSACTIONS_FILENAME);
    let contents = export::transactions_csv(&store.transactions, &store.categories)?;
    export::write_csv(Path::new(out), &contents)?;
    println!("Exported {} transaction(s) to {}", store.transactions.len(), out);
    Ok(())
}
