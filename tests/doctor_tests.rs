// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerpad::commands::doctor;
use ledgerpad::db::{KeyValueStore, SqliteKv};
use ledgerpad::persistence::{PersistenceBridge, TRANSACTIONS_KEY};

fn bridge_with(blob: Option<&str>) -> PersistenceBridge<SqliteKv> {
    let mut kv = SqliteKv::open_in_memory().unwrap();
    if let Some(b) = blob {
        kv.set(TRANSACTIONS_KEY, b).unwrap();
    }
    PersistenceBridge::new(kv)
}

fn kinds(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|r| r[0].as_str()).collect()
}

#[test]
fn empty_database_is_healthy() {
    let rows = doctor::issues(&bridge_with(None)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn flags_record_problems() {
    let blob = r#"[
        {"id":1,"description":"ok","amount":"5","status":"debit","transaction_date":"2024-01-01"},
        {"id":1,"description":"dup","amount":"12abc","status":"credit","transaction_date":"2024-01-02"},
        {"id":3,"description":"blank","amount":"","status":"","transaction_date":"2024-01-03"}
    ]"#;
    let rows = doctor::issues(&bridge_with(Some(blob))).unwrap();
    assert_eq!(
        kinds(&rows),
        vec![
            "duplicate_id",
            "unparsable_amount",
            "unparsable_amount",
            "unspecified_status"
        ]
    );
}

#[test]
fn flags_undated_and_out_of_range_records() {
    let blob = r#"[
        {"id":1,"description":"draft","amount":"5","status":"credit","transaction_date":""},
        {"id":2,"description":"huge","amount":"1e40","status":"credit","transaction_date":"2024-01-02"}
    ]"#;
    let rows = doctor::issues(&bridge_with(Some(blob))).unwrap();
    assert_eq!(kinds(&rows), vec!["missing_date", "amount_out_of_range"]);
}

#[test]
fn flags_corrupt_ledger_and_backup() {
    let mut bridge = bridge_with(Some("[{"));
    bridge.load().unwrap();
    let rows = doctor::issues(&bridge).unwrap();
    assert_eq!(kinds(&rows), vec!["corrupt_backup", "corrupt_ledger"]);
}
