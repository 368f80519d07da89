// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV serialization of report views. Rows come out in the order supplied
//! by the caller; nothing here re-sorts. Fields containing the delimiter or
//! a quote are wrapped in quotes with internal quotes doubled (the csv
//! crate's default quoting); the amount is the raw unformatted number.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{Category, Collaborator, Transaction};
use crate::store::{category_label, collaborator_label};

pub const REPORT_HEADER: [&str; 6] = [
    "Descrição",
    "Tipo",
    "Valor",
    "Data",
    "Categoria",
    "Colaborador",
];
pub const TRANSACTIONS_HEADER: [&str; 5] = ["Descrição", "Tipo", "Valor", "Data", "Categoria"];

pub const REPORTS_FILENAME: &str = "relatorios.csv";
pub const RECENT_REPORTS_FILENAME: &str = "relatorios_recentes.csv";
pub const TRANSACTIONS_FILENAME: &str = "transacoes.csv";

/// Full report view: transactions joined with category and collaborator
/// names, dates down to the minute.
pub fn report_csv(
    transactions: &[Transaction],
    categories: &[Category],
    collaborators: &[Collaborator],
) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        wtr.write_record(REPORT_HEADER)?;
        for t in transactions {
            wtr.write_record([
                t.description.as_str(),
                t.kind.label(),
                &t.amount.to_string(),
                &t.date.format("%Y-%m-%d %H:%M").to_string(),
                category_label(categories, &t.category_id),
                collaborator_label(collaborators, &t.collaborator_id),
            ])?;
        }
        wtr.flush()?;
    }
    String::from_utf8(buf).context("CSV output was not UTF-8")
}

/// Transactions view: no collaborator column, dates at day precision.
pub fn transactions_csv(transactions: &[Transaction], categories: &[Category]) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        wtr.write_record(TRANSACTIONS_HEADER)?;
        for t in transactions {
            wtr.write_record([
                t.description.as_str(),
                t.kind.label(),
                &t.amount.to_string(),
                &t.date.format("%Y-%m-%d").to_string(),
                category_label(categories, &t.category_id),
            ])?;
        }
        wtr.flush()?;
    }
    String::from_utf8(buf).context("CSV output was not UTF-8")
}

pub fn write_csv(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Write CSV {}", path.display()))
}
