// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::anyhow;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label shown when a transaction references a category that no longer exists.
pub const UNCATEGORIZED: &str = "Sem categoria";
/// Label shown when a transaction references an unknown collaborator.
pub const UNKNOWN_COLLABORATOR: &str = "N/A";

/// Roster roles in display order. Unknown roles sort after all of these.
pub const AVAILABLE_ROLES: [&str; 6] = [
    "Presidente",
    "Gerencia",
    "Painter",
    "Tuner",
    "Trainee",
    "Aposentado",
];

/// Rank of a role within [`AVAILABLE_ROLES`]; unknown roles rank last.
pub fn role_rank(role: &str) -> usize {
    AVAILABLE_ROLES
        .iter()
        .position(|r| *r == role)
        .unwrap_or(AVAILABLE_ROLES.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Revenue,
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Revenue => "Receita",
            TransactionKind::Expense => "Despesa",
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            TransactionKind::Revenue => "+",
            TransactionKind::Expense => "-",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revenue" | "receita" => Ok(TransactionKind::Revenue),
            "expense" | "despesa" => Ok(TransactionKind::Expense),
            other => Err(anyhow!(
                "Invalid transaction type '{}', expected revenue|expense",
                other
            )),
        }
    }
}

/// A single revenue or expense record. `amount` is strictly positive; the
/// kind alone decides the display sign. Category/collaborator references may
/// dangle and must be resolved through the store's lookup helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub category_id: String,
    pub collaborator_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
}
