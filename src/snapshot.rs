// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Snapshot persistence. The store lives entirely in memory for the run;
//! the JSON snapshot is only the seed it is re-derived from on the next
//! load. No durability guarantees beyond a plain file write.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

use crate::models::{Category, Skill, Transaction, TransactionKind};
use crate::store::Store;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("app.sgbr", "SGBR", "sgbr"));

/// `SGBR_SNAPSHOT` overrides the platform data dir.
pub fn snapshot_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var("SGBR_SNAPSHOT") {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("sgbr.json"))
}

pub fn load_or_init() -> Result<Store> {
    let path = snapshot_path()?;
    let mut store = if path.exists() {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Read snapshot {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Parse snapshot {}", path.display()))?
    } else {
        Store::default()
    };
    store.seed_counters();
    Ok(store)
}

pub fn save(store: &Store) -> Result<()> {
    let path = snapshot_path()?;
    let text = serde_json::to_string_pretty(store)?;
    fs::write(&path, text).with_context(|| format!("Write snapshot {}", path.display()))?;
    Ok(())
}

/// Demo seed matching the product's stock data: six categories, five
/// skills, and a July 2024 week of transactions. Collaborators come from
/// the remote roster (`collab sync`), not the seed.
pub fn seed_demo(store: &mut Store) -> Result<()> {
    let day = |s: &str| -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .with_context(|| format!("Invalid seed date '{}'", s))
    };

    store.replace_categories(
        [
            ("1", "Desenvolvimento Web", "#3b82f6"),
            ("2", "Consultoria", "#16a34a"),
            ("3", "Software", "#ea580c"),
            ("4", "Material de Escritório", "#7c3aed"),
            ("5", "Utilidades", "#db2777"),
            ("6", "Marketing", "#f59e0b"),
        ]
        .into_iter()
        .map(|(id, name, color)| Category {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        })
        .collect(),
    );

    store.skills = [
        ("1", "React"),
        ("2", "Contabilidade"),
        ("3", "Gestão de Projetos"),
        ("4", "Comunicação"),
        ("5", "Design Gráfico"),
    ]
    .into_iter()
    .map(|(id, name)| Skill {
        id: id.into(),
        name: name.into(),
    })
    .collect();

    let seed_tx = |id: &str,
                   kind: TransactionKind,
                   description: &str,
                   amount: i64,
                   date: &str,
                   category_id: &str,
                   collaborator_id: &str|
     -> Result<Transaction> {
        Ok(Transaction {
            id: id.into(),
            kind,
            description: description.into(),
            amount: amount.into(),
            date: day(date)?,
            category_id: category_id.into(),
            collaborator_id: collaborator_id.into(),
        })
    };
    store.replace_transactions(vec![
        seed_tx(
            "1",
            TransactionKind::Revenue,
            "Projeto de web design para Acme Corp",
            2500,
            "2024-07-01T00:00:00",
            "1",
            "1",
        )?,
        seed_tx(
            "2",
            TransactionKind::Expense,
            "Assinatura mensal da Adobe Creative Cloud",
            99,
            "2024-07-03T00:00:00",
            "3",
            "2",
        )?,
        seed_tx(
            "3",
            TransactionKind::Revenue,
            "Serviços de consultoria para Tech Solutions",
            1200,
            "2024-07-10T00:00:00",
            "2",
            "1",
        )?,
        seed_tx(
            "4",
            TransactionKind::Expense,
            "Material de escritório da Staples",
            150,
            "2024-07-12T00:00:00",
            "4",
            "3",
        )?,
        seed_tx(
            "5",
            TransactionKind::Expense,
            "Hospedagem Vercel para o site da empresa",
            75,
            "2024-07-15T00:00:00",
            "3",
            "4",
        )?,
    ]);
    store.seed_counters();
    Ok(())
}
