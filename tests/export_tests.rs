// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sgbr::models::{Category, Collaborator, Transaction, TransactionKind};
use sgbr::store::{NewTransaction, Store};
use sgbr::{cli, commands, export};
use tempfile::tempdir;

fn tx(
    id: &str,
    kind: TransactionKind,
    description: &str,
    amount: Decimal,
    date: &str,
    category_id: &str,
    collaborator_id: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        description: description.to_string(),
        amount,
        date: NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").unwrap(),
        category_id: category_id.to_string(),
        collaborator_id: collaborator_id.to_string(),
    }
}

fn cat(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: "#3b82f6".to_string(),
    }
}

fn collab(id: &str, name: &str) -> Collaborator {
    Collaborator {
        id: id.to_string(),
        name: name.to_string(),
        role: "Gerencia".to_string(),
        avatar_url: None,
        skills: Vec::new(),
    }
}

#[test]
fn report_csv_is_byte_exact_for_the_sample_data() {
    let txs = vec![
        tx(
            "1",
            TransactionKind::Revenue,
            "Projeto de web design para Acme Corp",
            Decimal::from(2500),
            "2024-07-01T00:00:00",
            "1",
            "1",
        ),
        tx(
            "2",
            TransactionKind::Expense,
            "Assinatura mensal da Adobe Creative Cloud",
            Decimal::from(99),
            "2024-07-03T00:00:00",
            "3",
            "9",
        ),
    ];
    let categories = vec![cat("1", "Desenvolvimento Web"), cat("3", "Software")];
    let collaborators = vec![collab("1", "Ana Lima")];

    let got = export::report_csv(&txs, &categories, &collaborators).unwrap();
    let want = "Descrição,Tipo,Valor,Data,Categoria,Colaborador\n\
                Projeto de web design para Acme Corp,Receita,2500,2024-07-01 00:00,Desenvolvimento Web,Ana Lima\n\
                Assinatura mensal da Adobe Creative Cloud,Despesa,99,2024-07-03 00:00,Software,N/A\n";
    assert_eq!(got, want);
}

#[test]
fn fields_with_delimiters_or_quotes_get_standard_csv_quoting() {
    let txs = vec![tx(
        "1",
        TransactionKind::Revenue,
        "Serviço urgente, com \"prioridade\"",
        Decimal::from(10),
        "2024-07-01T08:30:00",
        "1",
        "1",
    )];
    let categories = vec![cat("1", "Peças, usadas")];
    let collaborators = vec![collab("1", "Ana Lima")];

    let got = export::report_csv(&txs, &categories, &collaborators).unwrap();
    let want = "Descrição,Tipo,Valor,Data,Categoria,Colaborador\n\
                \"Serviço urgente, com \"\"prioridade\"\"\",Receita,10,2024-07-01 08:30,\"Peças, usadas\",Ana Lima\n";
    assert_eq!(got, want);
}

#[test]
fn amount_stays_raw_and_unquoted() {
    let txs = vec![tx(
        "1",
        TransactionKind::Expense,
        "Hospedagem mensal",
        Decimal::new(7550, 2), // 75.50
        "2024-07-15T00:00:00",
        "1",
        "1",
    )];
    let got = export::transactions_csv(&txs, &[cat("1", "Software")]).unwrap();
    assert!(got.contains(",75.50,"));
}

#[test]
fn parsing_the_export_back_yields_one_row_per_transaction_plus_header() {
    let txs: Vec<Transaction> = (1..=7)
        .map(|i| {
            tx(
                &i.to_string(),
                TransactionKind::Revenue,
                "Descrição, com vírgula",
                Decimal::from(i),
                "2024-07-01T00:00:00",
                "1",
                "1",
            )
        })
        .collect();
    let got = export::report_csv(&txs, &[], &[]).unwrap();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(got.as_bytes());
    let rows = rdr.records().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(rows.len(), txs.len() + 1);
    for row in &rows[1..] {
        assert_eq!(row.len(), 6);
        assert_eq!(&row[4], "Sem categoria");
        assert_eq!(&row[5], "N/A");
    }
}

#[test]
fn transactions_view_drops_the_collaborator_column() {
    let txs = vec![tx(
        "1",
        TransactionKind::Revenue,
        "Consultoria avulsa",
        Decimal::from(300),
        "2024-07-10T14:45:00",
        "1",
        "1",
    )];
    let got = export::transactions_csv(&txs, &[cat("1", "Consultoria")]).unwrap();
    let want = "Descrição,Tipo,Valor,Data,Categoria\n\
                Consultoria avulsa,Receita,300,2024-07-10,Consultoria\n";
    assert_eq!(got, want);
}

#[test]
fn export_preserves_caller_order() {
    // Deliberately not date-sorted; the formatter must not re-sort.
    let txs = vec![
        tx("1", TransactionKind::Revenue, "Primeira linha", Decimal::from(1), "2024-01-01T00:00:00", "1", "1"),
        tx("2", TransactionKind::Revenue, "Segunda linha", Decimal::from(2), "2024-06-01T00:00:00", "1", "1"),
    ];
    let got = export::report_csv(&txs, &[], &[]).unwrap();
    let lines: Vec<&str> = got.lines().collect();
    assert!(lines[1].starts_with("Primeira linha"));
    assert!(lines[2].starts_with("Segunda linha"));
}

fn store_with_one_tx() -> Store {
    let mut store = Store::default();
    store
        .add_category("Consultoria".into(), "#16a34a".into())
        .unwrap();
    store
        .add_collaborator("Ana Lima".into(), "Gerencia".into(), None, Vec::new())
        .unwrap();
    store
        .add_transaction(NewTransaction {
            kind: TransactionKind::Revenue,
            description: "Consultoria avulsa".into(),
            amount: Decimal::from(300),
            date: Some(NaiveDateTime::parse_from_str("2024-07-10T14:45:00", "%Y-%m-%dT%H:%M:%S").unwrap()),
            category_id: "1".into(),
            collaborator_id: "1".into(),
        })
        .unwrap();
    store
}

#[test]
fn tx_export_command_writes_the_transactions_view() {
    let mut store = store_with_one_tx();
    let dir = tempdir().unwrap();
    let out = dir.path().join("transacoes.csv");
    let out_str = out.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["sgbr", "tx", "export", "--out", &out_str]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        // Export is read-only and must not request a snapshot save.
        assert!(!commands::transactions::handle(&mut store, tx_m).unwrap());
    } else {
        panic!("no tx subcommand");
    }

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Descrição,Tipo,Valor,Data,Categoria\n"));
    assert!(contents.contains("Consultoria avulsa,Receita,300,2024-07-10,Consultoria"));
}

#[test]
fn report_export_command_writes_the_full_view() {
    let mut store = store_with_one_tx();
    let dir = tempdir().unwrap();
    let out = dir.path().join("relatorios.csv");
    let out_str = out.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["sgbr", "report", "export", "--out", &out_str]);
    if let Some(("report", report_m)) = matches.subcommand() {
        assert!(!commands::reports::handle(&mut store, report_m).unwrap());
    } else {
        panic!("no report subcommand");
    }

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Descrição,Tipo,Valor,Data,Categoria,Colaborador\n"));
    assert!(contents.contains(",Ana Lima\n"));
}

#[test]
fn mutating_subcommands_request_a_snapshot_save_and_listing_does_not() {
    let mut store = store_with_one_tx();

    let matches =
        cli::build_cli().get_matches_from(["sgbr", "tx", "reset-expenses"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    assert!(commands::transactions::handle(&mut store, tx_m).unwrap());

    let matches = cli::build_cli().get_matches_from(["sgbr", "tx", "list", "--json"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    assert!(!commands::transactions::handle(&mut store, tx_m).unwrap());

    let matches = cli::build_cli().get_matches_from(["sgbr", "vault", "set", "--amount", "100"]);
    let Some(("vault", vault_m)) = matches.subcommand() else {
        panic!("no vault subcommand");
    };
    assert!(commands::vault::handle(&mut store, vault_m).unwrap());
}
