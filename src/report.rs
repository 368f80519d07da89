// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the transaction list. Everything here is a pure
//! function: no mutation, no errors, no panics on empty input.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub profit: Decimal,
}

/// Inclusive date-range filter. `from` is taken as start of day and `to` as
/// end of day; a missing `to` means the end of `from`'s own day. Input order
/// is preserved, so filtering an already-filtered list is a no-op.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    from: NaiveDate,
    to: Option<NaiveDate>,
) -> Vec<Transaction> {
    let to = to.unwrap_or(from);
    transactions
        .iter()
        .filter(|t| {
            let day = t.date.date();
            day >= from && day <= to
        })
        .cloned()
        .collect()
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut total_revenue = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TransactionKind::Revenue => total_revenue += t.amount,
            TransactionKind::Expense => total_expenses += t.amount,
        }
    }
    Totals {
        total_revenue,
        total_expenses,
        profit: total_revenue - total_expenses,
    }
}

/// Average revenue per calendar day that carried at least one revenue
/// transaction. Zero when there is no revenue at all.
pub fn daily_average(transactions: &[Transaction]) -> Decimal {
    let mut days: HashSet<NaiveDate> = HashSet::new();
    let mut revenue = Decimal::ZERO;
    for t in transactions {
        if t.kind == TransactionKind::Revenue {
            days.insert(t.date.date());
            revenue += t.amount;
        }
    }
    if days.is_empty() {
        return Decimal::ZERO;
    }
    revenue / Decimal::from(days.len() as u64)
}

/// One bucket per calendar month, independent of year. A non-empty
/// `category_filter` restricts counting to transactions in those
/// categories; an empty set counts everything.
pub fn monthly_counts(transactions: &[Transaction], category_filter: &HashSet<String>) -> [u32; 12] {
    let mut buckets = [0u32; 12];
    for t in transactions {
        if !category_filter.is_empty() && !category_filter.contains(&t.category_id) {
            continue;
        }
        buckets[t.date.month0() as usize] += 1;
    }
    buckets
}

pub fn report_count_by_collaborator(transactions: &[Transaction], collaborator_id: &str) -> usize {
    transactions
        .iter()
        .filter(|t| t.collaborator_id == collaborator_id)
        .count()
}

/// The dashboard vault: a base value with every expense subtracted.
pub fn vault_balance(base: Decimal, transactions: &[Transaction]) -> Decimal {
    base - totals(transactions).total_expenses
}
