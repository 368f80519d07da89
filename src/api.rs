// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client for the remote SGBR API, which owns the collaborator roster
//! ("benneiros") and the externally created reports ("relatorios"). Wire
//! DTOs keep the API's Portuguese field names; mapping into the local
//! models happens here and nowhere else.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Collaborator, Transaction, TransactionKind, role_rank};
use crate::utils::http_client;

pub const DEFAULT_BASE_URL: &str = "https://sgbr-api.up.railway.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benneiro {
    pub id: i64,
    pub nome: String,
    pub cargo: String,
    #[serde(rename = "fotoPerfil", default)]
    pub foto_perfil: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBenneiro {
    pub nome: String,
    pub cargo: String,
    #[serde(rename = "fotoPerfil", skip_serializing_if = "Option::is_none")]
    pub foto_perfil: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Relatorio {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(default)]
    pub cpf: Option<i64>,
    #[serde(default)]
    pub lucro: Option<Decimal>,
    pub beneiro_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub edited_by: Option<String>,
    #[serde(default)]
    pub veiculo: Option<String>,
    #[serde(default)]
    pub escape: Option<String>,
    #[serde(default)]
    pub leilao: Option<bool>,
}

pub struct ApiClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let base = base.into().trim_end_matches('/').to_string();
        Ok(ApiClient {
            base,
            http: http_client()?,
        })
    }

    /// Base URL from `SGBR_API_URL`, falling back to the production host.
    pub fn from_env() -> Result<Self> {
        let base = std::env::var("SGBR_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ApiClient::new(base)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn list_benneiros(&self) -> Result<Vec<Benneiro>> {
        let resp = self
            .http
            .get(self.url("/benneiros"))
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    pub fn create_benneiro(&self, b: &NewBenneiro) -> Result<Benneiro> {
        let resp = self
            .http
            .post(self.url("/benneiros"))
            .json(b)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    pub fn update_benneiro(&self, id: i64, b: &NewBenneiro) -> Result<Benneiro> {
        let resp = self
            .http
            .put(self.url(&format!("/benneiros/{id}")))
            .json(b)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    pub fn delete_benneiro(&self, id: i64) -> Result<()> {
        self.http
            .delete(self.url(&format!("/benneiros/{id}")))
            .send()?
            .error_for_status()?;
        Ok(())
    }

    pub fn list_relatorios(&self) -> Result<Vec<Relatorio>> {
        let resp = self
            .http
            .get(self.url("/relatorios"))
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }
}

/// A failed fetch degrades to an empty list with a warning; the caller
/// keeps rendering best-effort data. No retry.
pub fn fetch_or_empty<T>(what: &str, res: Result<Vec<T>>) -> Vec<T> {
    match res {
        Ok(v) => v,
        Err(err) => {
            log::warn!("could not fetch {what}, falling back to empty list: {err:#}");
            Vec::new()
        }
    }
}

/// Roster mapping: benneiro -> collaborator, ordered by role rank, ties by
/// numeric id. Roles outside the known list sort last.
pub fn collaborators_from_benneiros(benneiros: Vec<Benneiro>) -> Vec<Collaborator> {
    let mut out: Vec<Collaborator> = benneiros
        .into_iter()
        .map(|b| Collaborator {
            id: b.id.to_string(),
            name: b.nome,
            role: b.cargo,
            avatar_url: b.foto_perfil,
            skills: Vec::new(),
        })
        .collect();
    out.sort_by(|a, b| {
        role_rank(&a.role).cmp(&role_rank(&b.role)).then_with(|| {
            let na = a.id.parse::<i64>().unwrap_or(i64::MAX);
            let nb = b.id.parse::<i64>().unwrap_or(i64::MAX);
            na.cmp(&nb)
        })
    });
    out
}

/// Colors assigned to categories synthesized from relatorio names. A fixed
/// cycling palette instead of the upstream's random hex, so imports are
/// deterministic.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#3b82f6", "#16a34a", "#ea580c", "#7c3aed", "#db2777", "#f59e0b",
];

/// Report mapping: distinct `categoria` names (first-seen order) become
/// categories; each relatorio becomes a transaction with
/// `lucro >= 0 -> revenue`, `amount = |lucro|`. A relatorio without a
/// matching category falls back to the first synthesized one.
pub fn import_relatorios(relatorios: &[Relatorio]) -> (Vec<Category>, Vec<Transaction>) {
    let mut categories: Vec<Category> = Vec::new();
    for r in relatorios {
        if let Some(name) = r.categoria.as_deref().filter(|n| !n.is_empty()) {
            if !categories.iter().any(|c| c.name == name) {
                categories.push(Category {
                    id: (categories.len() + 1).to_string(),
                    name: name.to_string(),
                    color: CATEGORY_PALETTE[categories.len() % CATEGORY_PALETTE.len()].to_string(),
                });
            }
        }
    }

    let transactions = relatorios
        .iter()
        .map(|r| {
            let lucro = r.lucro.unwrap_or(Decimal::ZERO);
            let kind = if lucro >= Decimal::ZERO {
                TransactionKind::Revenue
            } else {
                TransactionKind::Expense
            };
            let description = match (r.cliente.as_deref(), r.veiculo.as_deref()) {
                (Some(cliente), Some(veiculo)) => {
                    format!("Serviço para {cliente} no veículo {veiculo}")
                }
                _ => "Relatório sem descrição".to_string(),
            };
            let category_id = r
                .categoria
                .as_deref()
                .and_then(|name| categories.iter().find(|c| c.name == name))
                .or_else(|| categories.first())
                .map(|c| c.id.clone())
                .unwrap_or_else(|| "1".to_string());
            Transaction {
                id: r.id.map(|i| i.to_string()).unwrap_or_else(|| "0".to_string()),
                kind,
                description,
                amount: lucro.abs(),
                date: r
                    .created_at
                    .as_deref()
                    .and_then(parse_created_at)
                    .unwrap_or_else(|| Utc::now().naive_utc()),
                category_id,
                collaborator_id: r.beneiro_id.to_string(),
            }
        })
        .collect();

    (categories, transactions)
}

fn parse_created_at(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}
