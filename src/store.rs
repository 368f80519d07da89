// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Category, Collaborator, Skill, Transaction, TransactionKind, UNCATEGORIZED,
    UNKNOWN_COLLABORATOR,
};
use crate::validate::{self, ValidationError};

/// Per-entity id counters. Ids are monotonic and survive deletions, so a
/// delete followed by an add can never reuse an id.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Counters {
    #[serde(default)]
    pub transaction: u64,
    #[serde(default)]
    pub category: u64,
    #[serde(default)]
    pub collaborator: u64,
    #[serde(default)]
    pub skill: u64,
}

/// In-memory record store, seeded from a snapshot at load time. All CRUD
/// goes through here; edits and deletes are no-ops for absent ids.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub vault_base: Decimal,
    #[serde(default)]
    counters: Counters,
}

pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub date: Option<NaiveDateTime>,
    pub category_id: String,
    pub collaborator_id: String,
}

#[derive(Default)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDateTime>,
    pub category_id: Option<String>,
    pub collaborator_id: Option<String>,
}

#[derive(Default)]
pub struct CollaboratorPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar_url: Option<Option<String>>,
    pub skills: Option<Vec<String>>,
}

fn max_numeric_id<'a, I: Iterator<Item = &'a str>>(ids: I) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

fn next_id(counter: &mut u64) -> String {
    *counter += 1;
    counter.to_string()
}

impl Store {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.categories.is_empty()
            && self.collaborators.is_empty()
            && self.skills.is_empty()
    }

    /// Bring counters at least past every numeric id already present.
    /// Called after load; snapshots written before the counters existed
    /// carry zeroes.
    pub fn seed_counters(&mut self) {
        let c = &mut self.counters;
        c.transaction = c
            .transaction
            .max(max_numeric_id(self.transactions.iter().map(|t| t.id.as_str())));
        c.category = c
            .category
            .max(max_numeric_id(self.categories.iter().map(|c| c.id.as_str())));
        c.collaborator = c.collaborator.max(max_numeric_id(
            self.collaborators.iter().map(|c| c.id.as_str()),
        ));
        c.skill = c
            .skill
            .max(max_numeric_id(self.skills.iter().map(|s| s.id.as_str())));
    }

    // ----- transactions -----

    pub fn add_transaction(&mut self, input: NewTransaction) -> Result<String, ValidationError> {
        validate::name("description", &input.description)?;
        validate::positive_amount(input.amount)?;
        self.require_category(&input.category_id)?;
        self.require_collaborator(&input.collaborator_id)?;

        let id = next_id(&mut self.counters.transaction);
        let tx = Transaction {
            id: id.clone(),
            kind: input.kind,
            description: input.description,
            amount: input.amount,
            date: input.date.unwrap_or_else(|| Local::now().naive_local()),
            category_id: input.category_id,
            collaborator_id: input.collaborator_id,
        };
        // Newest goes in front, then a stable sort keeps it ahead of any
        // same-date record.
        self.transactions.insert(0, tx);
        self.transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(id)
    }

    pub fn edit_transaction(
        &mut self,
        id: &str,
        patch: TransactionPatch,
    ) -> Result<(), ValidationError> {
        if let Some(ref description) = patch.description {
            validate::name("description", description)?;
        }
        if let Some(amount) = patch.amount {
            validate::positive_amount(amount)?;
        }
        if let Some(ref category_id) = patch.category_id {
            self.require_category(category_id)?;
        }
        if let Some(ref collaborator_id) = patch.collaborator_id {
            self.require_collaborator(collaborator_id)?;
        }
        if let Some(tx) = self.transactions.iter_mut().find(|t| t.id == id) {
            if let Some(kind) = patch.kind {
                tx.kind = kind;
            }
            if let Some(description) = patch.description {
                tx.description = description;
            }
            if let Some(amount) = patch.amount {
                tx.amount = amount;
            }
            if let Some(date) = patch.date {
                tx.date = date;
            }
            if let Some(category_id) = patch.category_id {
                tx.category_id = category_id;
            }
            if let Some(collaborator_id) = patch.collaborator_id {
                tx.collaborator_id = collaborator_id;
            }
        }
        Ok(())
    }

    /// The only bulk delete in the design: drops every expense record.
    /// Returns how many were removed.
    pub fn reset_expenses(&mut self) -> usize {
        let before = self.transactions.len();
        self.transactions
            .retain(|t| t.kind != TransactionKind::Expense);
        before - self.transactions.len()
    }

    /// Replace transactions wholesale (remote report import). The list is
    /// re-sorted most recent first and counters are advanced past any
    /// numeric ids it carries.
    pub fn replace_transactions(&mut self, mut transactions: Vec<Transaction>) {
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        self.transactions = transactions;
        self.seed_counters();
    }

    // ----- categories -----

    pub fn add_category(&mut self, name: String, color: String) -> Result<String, ValidationError> {
        validate::name("name", &name)?;
        validate::hex_color(&color)?;
        let id = next_id(&mut self.counters.category);
        self.categories.push(Category {
            id: id.clone(),
            name,
            color,
        });
        Ok(id)
    }

    pub fn edit_category(
        &mut self,
        id: &str,
        name: Option<String>,
        color: Option<String>,
    ) -> Result<(), ValidationError> {
        if let Some(ref name) = name {
            validate::name("name", name)?;
        }
        if let Some(ref color) = color {
            validate::hex_color(color)?;
        }
        if let Some(cat) = self.categories.iter_mut().find(|c| c.id == id) {
            if let Some(name) = name {
                cat.name = name;
            }
            if let Some(color) = color {
                cat.color = color;
            }
        }
        Ok(())
    }

    /// No cascade: transactions referencing the category keep their id and
    /// resolve to the placeholder label from then on.
    pub fn delete_category(&mut self, id: &str) {
        self.categories.retain(|c| c.id != id);
    }

    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.seed_counters();
    }

    // ----- collaborators -----

    pub fn add_collaborator(
        &mut self,
        name: String,
        role: String,
        avatar_url: Option<String>,
        skills: Vec<String>,
    ) -> Result<String, ValidationError> {
        validate::name("name", &name)?;
        validate::known_role(&role)?;
        for skill_id in &skills {
            self.require_skill(skill_id)?;
        }
        let id = next_id(&mut self.counters.collaborator);
        self.collaborators.push(Collaborator {
            id: id.clone(),
            name,
            role,
            avatar_url,
            skills,
        });
        Ok(id)
    }

    pub fn edit_collaborator(
        &mut self,
        id: &str,
        patch: CollaboratorPatch,
    ) -> Result<(), ValidationError> {
        if let Some(ref name) = patch.name {
            validate::name("name", name)?;
        }
        if let Some(ref role) = patch.role {
            validate::known_role(role)?;
        }
        if let Some(ref skills) = patch.skills {
            for skill_id in skills {
                self.require_skill(skill_id)?;
            }
        }
        if let Some(collab) = self.collaborators.iter_mut().find(|c| c.id == id) {
            if let Some(name) = patch.name {
                collab.name = name;
            }
            if let Some(role) = patch.role {
                collab.role = role;
            }
            if let Some(avatar_url) = patch.avatar_url {
                collab.avatar_url = avatar_url;
            }
            if let Some(skills) = patch.skills {
                collab.skills = skills;
            }
        }
        Ok(())
    }

    pub fn delete_collaborator(&mut self, id: &str) {
        self.collaborators.retain(|c| c.id != id);
    }

    pub fn replace_collaborators(&mut self, collaborators: Vec<Collaborator>) {
        self.collaborators = collaborators;
        self.seed_counters();
    }

    // ----- skills -----

    pub fn add_skill(&mut self, name: String) -> Result<String, ValidationError> {
        validate::name("name", &name)?;
        let id = next_id(&mut self.counters.skill);
        self.skills.push(Skill {
            id: id.clone(),
            name,
        });
        Ok(id)
    }

    pub fn edit_skill(&mut self, id: &str, name: Option<String>) -> Result<(), ValidationError> {
        if let Some(ref name) = name {
            validate::name("name", name)?;
        }
        if let Some(skill) = self.skills.iter_mut().find(|s| s.id == id) {
            if let Some(name) = name {
                skill.name = name;
            }
        }
        Ok(())
    }

    pub fn delete_skill(&mut self, id: &str) {
        self.skills.retain(|s| s.id != id);
    }

    // ----- vault -----

    pub fn set_vault_base(&mut self, amount: Decimal) -> Result<(), ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeVaultBase);
        }
        self.vault_base = amount;
        Ok(())
    }

    // ----- lookups -----

    pub fn category_label(&self, id: &str) -> &str {
        category_label(&self.categories, id)
    }

    pub fn collaborator_label(&self, id: &str) -> &str {
        collaborator_label(&self.collaborators, id)
    }

    pub fn skill_name(&self, id: &str) -> Option<&str> {
        self.skills
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }

    fn require_category(&self, id: &str) -> Result<(), ValidationError> {
        if !self.categories.iter().any(|c| c.id == id) {
            return Err(ValidationError::UnknownCategory(id.to_string()));
        }
        Ok(())
    }

    fn require_collaborator(&self, id: &str) -> Result<(), ValidationError> {
        if !self.collaborators.iter().any(|c| c.id == id) {
            return Err(ValidationError::UnknownCollaborator(id.to_string()));
        }
        Ok(())
    }

    fn require_skill(&self, id: &str) -> Result<(), ValidationError> {
        if !self.skills.iter().any(|s| s.id == id) {
            return Err(ValidationError::UnknownSkill(id.to_string()));
        }
        Ok(())
    }
}

/// Resolve-or-default lookup: a dangling category id is never an error.
pub fn category_label<'a>(categories: &'a [Category], id: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Resolve-or-default lookup for collaborators.
pub fn collaborator_label<'a>(collaborators: &'a [Collaborator], id: &str) -> &'a str {
    collaborators
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_COLLABORATOR)
}
