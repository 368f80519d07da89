// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::report::{
    self, MONTH_LABELS, Totals, daily_average, monthly_counts, report_count_by_collaborator,
    totals, vault_balance,
};
use crate::store::Store;
use crate::utils::{fmt_brl, maybe_print_json, parse_date, pretty_table};

#[derive(Serialize)]
struct MonthCount {
    month: &'static str,
    count: u32,
}

#[derive(Serialize)]
struct TeamRow {
    name: String,
    role: String,
    reports: usize,
}

#[derive(Serialize)]
struct DashboardSummary {
    from: NaiveDate,
    to: NaiveDate,
    totals: Totals,
    daily_average: Decimal,
    vault_base: Decimal,
    vault_balance: Decimal,
    monthly_reports: Vec<MonthCount>,
    team: Vec<TeamRow>,
}

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    // Default window mirrors the dashboard: trailing 30 days.
    let today = Local::now().date_naive();
    let from = match sub.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => today - Duration::days(30),
    };
    let to = match sub.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => today,
    };

    let filtered = report::filter_by_date_range(&store.transactions, from, Some(to));
    let window_totals = totals(&filtered);
    let avg = daily_average(&filtered);
    // The vault and the monthly chart span everything, not just the window.
    let vault = vault_balance(store.vault_base, &store.transactions);
    let buckets = monthly_counts(&store.transactions, &HashSet::new());

    let summary = DashboardSummary {
        from,
        to,
        daily_average: avg,
        vault_base: store.vault_base,
        vault_balance: vault,
        monthly_reports: MONTH_LABELS
            .iter()
            .zip(buckets)
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
        team: store
            .collaborators
            .iter()
            .map(|c| TeamRow {
                name: c.name.clone(),
                role: c.role.clone(),
                reports: report_count_by_collaborator(&store.transactions, &c.id),
            })
            .collect(),
        totals: window_totals,
    };

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!(
        "Resumo de {} a {}",
        summary.from.format("%d/%m/%Y"),
        summary.to.format("%d/%m/%Y")
    );
    println!("  Receita Total:   {}", fmt_brl(&summary.totals.total_revenue));
    println!("  Despesas Totais: {}", fmt_brl(&summary.totals.total_expenses));
    println!("  Lucro Líquido:   {}", fmt_brl(&summary.totals.profit));
    println!("  Média Diária:    {}", fmt_brl(&summary.daily_average));
    println!(
        "  Cofre:           {} (base {})",
        fmt_brl(&summary.vault_balance),
        fmt_brl(&summary.vault_base)
    );

    let monthly_rows: Vec<Vec<String>> = summary
        .monthly_reports
        .iter()
        .map(|m| vec![m.month.to_string(), m.count.to_string()])
        .collect();
    println!("{}", pretty_table(&["Mês", "Relatórios"], monthly_rows));

    let team_rows: Vec<Vec<String>> = summary
        .team
        .iter()
        .map(|t| vec![t.name.clone(), t.role.clone(), t.reports.to_string()])
        .collect();
    println!("{}", pretty_table(&["Nome", "Cargo", "Relatórios"], team_rows));
    Ok(())
}
