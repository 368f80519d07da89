// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Duration, Local};
use serde::Serialize;
use std::path::Path;
use std::time::Duration as StdDuration;

use crate::api::{ApiClient, collaborators_from_benneiros, fetch_or_empty, import_relatorios};
use crate::cache::TtlCache;
use crate::export;
use crate::report::filter_by_date_range;
use crate::store::Store;
use crate::utils::{fmt_brl, maybe_print_json, pretty_table};

pub const ITEMS_PER_PAGE: usize = 5;

const ROSTER_STALE_AFTER: StdDuration = StdDuration::from_secs(300);

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("list", sub)) => {
            list(store, sub)?;
            Ok(false)
        }
        Some(("export", sub)) => {
            export_csv(store, sub)?;
            Ok(false)
        }
        Some(("fetch", _)) => {
            fetch(store)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

#[derive(Serialize)]
pub struct ReportRow {
    pub id: String,
    pub description: String,
    pub collaborator: String,
    pub category: String,
    pub date: String,
    pub amount: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let all = sub.get_flag("all");

    let total = store.transactions.len();
    let total_pages = total.div_ceil(ITEMS_PER_PAGE).max(1);
    let page = sub
        .get_one::<usize>("page")
        .copied()
        .unwrap_or(1)
        .clamp(1, total_pages);

    let slice: &[_] = if all {
        &store.transactions
    } else {
        let start = (page - 1) * ITEMS_PER_PAGE;
        let end = (start + ITEMS_PER_PAGE).min(total);
        &store.transactions[start..end]
    };

    let data: Vec<ReportRow> = slice
        .iter()
        .map(|t| ReportRow {
            id: t.id.clone(),
            description: t.description.clone(),
            collaborator: store.collaborator_label(&t.collaborator_id).to_string(),
            category: store.category_label(&t.category_id).to_string(),
            date: t.date.format("%d/%m/%Y %H:%M").to_string(),
            amount: format!("{}{}", t.kind.sign(), fmt_brl(&t.amount)),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.description.clone(),
                    r.collaborator.clone(),
                    r.category.clone(),
                    r.date.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Descrição", "Colaborador", "Categoria", "Data", "Valor"],
                rows
            )
        );
        if !all {
            println!("Página {} de {}", page, total_pages);
        }
    }
    Ok(())
}

fn export_csv(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let recent = sub.get_flag("recent");
    let transactions = if recent {
        let today = Local::now().date_naive();
        filter_by_date_range(&store.transactions, today - Duration::days(30), Some(today))
    } else {
        store.transactions.clone()
    };
    let default_name = if recent {
        export::RECENT_REPORTS_FILENAME
    } else {
        export::REPORTS_FILENAME
    };
    let out = sub
        .get_one::<String>("out")
        .map(|s| s.as_str())
        .unwrap_or(default_name);

    let contents = export::report_csv(&transactions, &store.categories, &store.collaborators)?;
    export::write_csv(Path::new(out), &contents)?;
    println!("Exported {} report(s) to {}", transactions.len(), out);
    Ok(())
}

/// Pull everything the remote owns and reseed the local store from it,
/// exactly like the reports page does on load. The roster fetch goes
/// through a TTL cache so both consumers below share one request.
fn fetch(store: &mut Store) -> Result<()> {
    let client = ApiClient::from_env()?;
    let mut roster_cache = TtlCache::new(ROSTER_STALE_AFTER);

    let relatorios = fetch_or_empty("relatorios", client.list_relatorios());
    let (categories, transactions) = import_relatorios(&relatorios);

    let benneiros = fetch_or_empty(
        "benneiros",
        roster_cache.get_or_fetch(|| client.list_benneiros()),
    );
    let collaborators = collaborators_from_benneiros(benneiros);

    println!(
        "Fetched {} report(s), {} categorie(s), {} collaborator(s)",
        transactions.len(),
        categories.len(),
        collaborators.len()
    );
    store.replace_categories(categories);
    store.replace_transactions(transactions);
    store.replace_collaborators(collaborators);

    // Team card refresh; this roster read is served from the cache.
    let refreshed = fetch_or_empty(
        "benneiros",
        roster_cache.get_or_fetch(|| client.list_benneiros()),
    );
    for c in collaborators_from_benneiros(refreshed) {
        let count = crate::report::report_count_by_collaborator(&store.transactions, &c.id);
        println!("  {} ({}): {} relatório(s)", c.name, c.role, count);
    }
    Ok(())
}
