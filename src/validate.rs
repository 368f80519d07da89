// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::AVAILABLE_ROLES;

/// Submit-time validation failures. A rejected input applies no mutation;
/// nothing is re-checked after submit (references may dangle later).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("color '{0}' must be a 6-digit hex value like #3b82f6")]
    InvalidColor(String),
    #[error("amount must be a positive number")]
    NonPositiveAmount,
    #[error("category '{0}' not found")]
    UnknownCategory(String),
    #[error("collaborator '{0}' not found")]
    UnknownCollaborator(String),
    #[error("skill '{0}' not found")]
    UnknownSkill(String),
    #[error("role '{0}' is not one of the available roles")]
    UnknownRole(String),
    #[error("vault base must not be negative")]
    NegativeVaultBase,
}

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new("^#[0-9a-fA-F]{6}$").expect("valid hex color pattern"));

pub const MIN_NAME_LEN: usize = 2;

pub fn name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field,
            min: MIN_NAME_LEN,
        });
    }
    Ok(())
}

pub fn hex_color(value: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(value) {
        return Err(ValidationError::InvalidColor(value.to_string()));
    }
    Ok(())
}

pub fn positive_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

pub fn known_role(role: &str) -> Result<(), ValidationError> {
    if !AVAILABLE_ROLES.contains(&role) {
        return Err(ValidationError::UnknownRole(role.to_string()));
    }
    Ok(())
}
