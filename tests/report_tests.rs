// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sgbr::models::{Transaction, TransactionKind};
use sgbr::report::{
    daily_average, filter_by_date_range, monthly_counts, report_count_by_collaborator, totals,
    vault_balance,
};

fn tx(id: &str, kind: TransactionKind, amount: i64, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        description: format!("tx {id}"),
        amount: Decimal::from(amount),
        date: NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").unwrap(),
        category_id: "1".to_string(),
        collaborator_id: "1".to_string(),
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn totals_match_the_sample_data() {
    let txs = vec![
        tx("1", TransactionKind::Revenue, 2500, "2024-07-01T00:00:00"),
        tx("2", TransactionKind::Expense, 99, "2024-07-03T00:00:00"),
    ];
    let t = totals(&txs);
    assert_eq!(t.total_revenue, Decimal::from(2500));
    assert_eq!(t.total_expenses, Decimal::from(99));
    assert_eq!(t.profit, Decimal::from(2401));
}

#[test]
fn profit_is_revenue_minus_expenses() {
    let txs = vec![
        tx("1", TransactionKind::Revenue, 100, "2024-01-05T09:00:00"),
        tx("2", TransactionKind::Revenue, 40, "2024-02-05T09:00:00"),
        tx("3", TransactionKind::Expense, 70, "2024-02-06T09:00:00"),
        tx("4", TransactionKind::Expense, 5, "2024-03-01T09:00:00"),
    ];
    let t = totals(&txs);
    assert_eq!(t.profit, t.total_revenue - t.total_expenses);
}

#[test]
fn totals_of_empty_list_are_zero() {
    let t = totals(&[]);
    assert_eq!(t.total_revenue, Decimal::ZERO);
    assert_eq!(t.total_expenses, Decimal::ZERO);
    assert_eq!(t.profit, Decimal::ZERO);
}

#[test]
fn monthly_counts_sum_to_list_length_without_filter() {
    let txs = vec![
        tx("1", TransactionKind::Revenue, 10, "2024-01-15T12:00:00"),
        tx("2", TransactionKind::Expense, 10, "2024-01-20T12:00:00"),
        tx("3", TransactionKind::Revenue, 10, "2023-07-04T12:00:00"),
        tx("4", TransactionKind::Revenue, 10, "2024-12-31T23:59:00"),
    ];
    let buckets = monthly_counts(&txs, &HashSet::new());
    assert_eq!(buckets.iter().map(|c| *c as usize).sum::<usize>(), txs.len());
    assert_eq!(buckets[0], 2); // Jan, year-agnostic
    assert_eq!(buckets[6], 1);
    assert_eq!(buckets[11], 1);
}

#[test]
fn monthly_counts_respect_the_category_filter() {
    let mut txs = vec![
        tx("1", TransactionKind::Revenue, 10, "2024-03-01T00:00:00"),
        tx("2", TransactionKind::Revenue, 10, "2024-03-02T00:00:00"),
    ];
    txs[1].category_id = "9".to_string();
    let filter: HashSet<String> = ["9".to_string()].into_iter().collect();
    let buckets = monthly_counts(&txs, &filter);
    assert_eq!(buckets[2], 1);
    assert_eq!(buckets.iter().sum::<u32>(), 1);
}

#[test]
fn date_filter_is_inclusive_and_idempotent() {
    let txs = vec![
        tx("1", TransactionKind::Revenue, 10, "2024-07-01T00:00:00"),
        tx("2", TransactionKind::Revenue, 10, "2024-07-05T23:59:00"),
        tx("3", TransactionKind::Revenue, 10, "2024-07-06T00:00:00"),
    ];
    let once = filter_by_date_range(&txs, day("2024-07-01"), Some(day("2024-07-05")));
    assert_eq!(once.len(), 2);
    let twice = filter_by_date_range(&once, day("2024-07-01"), Some(day("2024-07-05")));
    assert_eq!(once, twice);
}

#[test]
fn date_filter_without_to_covers_the_whole_from_day() {
    let txs = vec![
        tx("1", TransactionKind::Revenue, 10, "2024-07-01T17:30:00"),
        tx("2", TransactionKind::Revenue, 10, "2024-07-02T00:00:00"),
    ];
    let got = filter_by_date_range(&txs, day("2024-07-01"), None);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].id, "1");
}

#[test]
fn date_filter_of_empty_list_is_empty() {
    assert!(filter_by_date_range(&[], day("2024-01-01"), Some(day("2024-12-31"))).is_empty());
}

#[test]
fn daily_average_divides_by_distinct_revenue_days() {
    let txs = vec![
        tx("1", TransactionKind::Revenue, 100, "2024-07-01T08:00:00"),
        tx("2", TransactionKind::Revenue, 200, "2024-07-01T18:00:00"),
        tx("3", TransactionKind::Revenue, 300, "2024-07-02T10:00:00"),
        tx("4", TransactionKind::Expense, 999, "2024-07-03T10:00:00"),
    ];
    assert_eq!(daily_average(&txs), Decimal::from(300));
}

#[test]
fn daily_average_is_zero_without_revenue() {
    let txs = vec![tx("1", TransactionKind::Expense, 50, "2024-07-01T00:00:00")];
    assert_eq!(daily_average(&txs), Decimal::ZERO);
    assert_eq!(daily_average(&[]), Decimal::ZERO);
}

#[test]
fn report_counts_per_collaborator() {
    let mut txs = vec![
        tx("1", TransactionKind::Revenue, 10, "2024-07-01T00:00:00"),
        tx("2", TransactionKind::Revenue, 10, "2024-07-02T00:00:00"),
        tx("3", TransactionKind::Expense, 10, "2024-07-03T00:00:00"),
    ];
    txs[2].collaborator_id = "2".to_string();
    assert_eq!(report_count_by_collaborator(&txs, "1"), 2);
    assert_eq!(report_count_by_collaborator(&txs, "2"), 1);
    assert_eq!(report_count_by_collaborator(&txs, "missing"), 0);
}

#[test]
fn vault_subtracts_cumulative_expenses_from_the_base() {
    let txs = vec![
        tx("1", TransactionKind::Revenue, 1000, "2024-07-01T00:00:00"),
        tx("2", TransactionKind::Expense, 150, "2024-07-02T00:00:00"),
        tx("3", TransactionKind::Expense, 50, "2024-07-03T00:00:00"),
    ];
    assert_eq!(vault_balance(Decimal::from(500), &txs), Decimal::from(300));
    assert_eq!(vault_balance(Decimal::ZERO, &[]), Decimal::ZERO);
}
