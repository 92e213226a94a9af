// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerpad::db::{self, KeyValueStore, MemoryKv, SqliteKv};
use ledgerpad::models::{Status, Transaction};
use ledgerpad::persistence::{
    BlobState, PersistenceBridge, CORRUPT_BACKUP_KEY, TRANSACTIONS_KEY,
};
use ledgerpad::store::TransactionStore;
use tempfile::tempdir;

fn sample() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            description: "Coffee, large".into(),
            amount: "5.40".into(),
            status: Status::Debit,
            transaction_date: Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
        },
        Transaction {
            id: 2,
            description: String::new(),
            amount: "not a number".into(),
            status: Status::Credit,
            transaction_date: Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
        },
    ]
}

#[test]
fn load_of_missing_key_is_empty() {
    let mut bridge = PersistenceBridge::new(MemoryKv::new());
    assert!(bridge.load().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips_through_sqlite() {
    let mut bridge = PersistenceBridge::new(SqliteKv::open_in_memory().unwrap());
    let records = sample();
    bridge.save(&records).unwrap();
    assert_eq!(bridge.load().unwrap(), records);
}

#[test]
fn blob_uses_plain_field_names() {
    let mut bridge = PersistenceBridge::new(MemoryKv::new());
    bridge.save(&sample()[..1]).unwrap();
    let raw = bridge.kv().get(TRANSACTIONS_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        v,
        serde_json::json!([{
            "id": 1,
            "description": "Coffee, large",
            "amount": "5.40",
            "status": "debit",
            "transaction_date": "2024-01-10"
        }])
    );
}

#[test]
fn unknown_fields_and_statuses_are_tolerated() {
    let mut kv = MemoryKv::new();
    kv.set(
        TRANSACTIONS_KEY,
        r#"[{"id":1,"amount":"3","status":"pending","transaction_date":"2024-03-01","memo":"x"}]"#,
    )
    .unwrap();
    let mut bridge = PersistenceBridge::new(kv);
    let records = bridge.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "");
    assert_eq!(records[0].status, Status::Unspecified);
}

#[test]
fn undated_record_keeps_the_rest_of_the_ledger() {
    let mut kv = MemoryKv::new();
    kv.set(
        TRANSACTIONS_KEY,
        r#"[{"id":1,"description":"Coffee","amount":"5","status":"debit","transaction_date":"2024-01-10"},
            {"id":2,"description":"Draft","amount":"","status":"","transaction_date":""}]"#,
    )
    .unwrap();
    let mut bridge = PersistenceBridge::new(kv);
    let records = bridge.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date_text(), "2024-01-10");
    assert_eq!(records[1].transaction_date, None);
    assert!(bridge.kv().get(CORRUPT_BACKUP_KEY).unwrap().is_none());

    bridge.save(&records).unwrap();
    let raw = bridge.kv().get(TRANSACTIONS_KEY).unwrap().unwrap();
    assert!(raw.contains(r#""transaction_date":"""#));
    assert_eq!(bridge.load().unwrap(), records);
}

#[test]
fn corrupt_blob_is_set_aside_and_store_starts_empty() {
    let mut kv = MemoryKv::new();
    kv.set(TRANSACTIONS_KEY, "{not json").unwrap();
    let bridge = PersistenceBridge::new(kv);
    assert!(matches!(bridge.inspect().unwrap(), BlobState::Corrupt(_)));

    let store = TransactionStore::open(bridge).unwrap();
    assert!(store.is_empty());
    let kv = store.bridge().unwrap().kv();
    assert_eq!(
        kv.get(CORRUPT_BACKUP_KEY).unwrap().as_deref(),
        Some("{not json")
    );
    // the original blob stays until the next mutation overwrites it
    assert_eq!(kv.get(TRANSACTIONS_KEY).unwrap().as_deref(), Some("{not json"));
}

#[test]
fn sqlite_file_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("ledger.sqlite");
    let path = db::db_path(Some(path.as_path())).unwrap();

    let mut bridge = PersistenceBridge::new(db::open_or_init(&path).unwrap());
    bridge.save(&sample()).unwrap();
    drop(bridge);

    let mut reopened = PersistenceBridge::new(db::open_or_init(&path).unwrap());
    assert_eq!(reopened.load().unwrap(), sample());
}
