// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerpad::models::{NewTransaction, Status};
use ledgerpad::store::TransactionStore;
use ledgerpad::{cli, commands::exporter};
use serde_json::json;
use tempfile::tempdir;

fn base_store() -> TransactionStore {
    let mut store = TransactionStore::detached();
    store
        .create(NewTransaction {
            description: "Corner Shop, weekly run".into(),
            amount: "12.34".into(),
            status: Status::Debit,
            transaction_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        })
        .unwrap();
    store
        .create(NewTransaction {
            description: "Refund".into(),
            amount: "3".into(),
            status: Status::Credit,
            transaction_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        })
        .unwrap();
    store
}

fn run_export(store: &TransactionStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["ledgerpad", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_json_writes_visible_records() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &store,
        &["--format", "json", "--out", &out_str, "--to", "2025-01-31"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 1,
                "description": "Corner Shop, weekly run",
                "amount": "12.34",
                "status": "debit",
                "transaction_date": "2025-01-02"
            }
        ])
    );
}

#[test]
fn export_csv_quotes_descriptions() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&store, &["--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "id,description,amount,status,transaction_date");
    assert_eq!(lines[1], "1,\"Corner Shop, weekly run\",12.34,debit,2025-01-02");
    assert_eq!(lines[2], "2,Refund,3,credit,2025-02-01");
}

#[test]
fn export_rejects_unknown_format() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&store, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}
