// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::models::{Status, Transaction};
use crate::persistence::{BlobState, PersistenceBridge, CORRUPT_BACKUP_KEY};
use crate::utils::{is_clean_amount, pretty_table, read_amount, AmountReading};
use anyhow::Result;
use std::collections::HashSet;

pub fn issues<K: KeyValueStore>(bridge: &PersistenceBridge<K>) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    if bridge.kv().get(CORRUPT_BACKUP_KEY)?.is_some() {
        rows.push(vec![
            "corrupt_backup".into(),
            format!("an unreadable ledger was set aside under '{}'", CORRUPT_BACKUP_KEY),
        ]);
    }

    let records = match bridge.inspect()? {
        BlobState::Missing => return Ok(rows),
        BlobState::Corrupt(e) => {
            rows.push(vec!["corrupt_ledger".into(), e.to_string()]);
            return Ok(rows);
        }
        BlobState::Valid(records) => records,
    };
    rows.extend(record_issues(&records));
    Ok(rows)
}

pub fn record_issues(records: &[Transaction]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();
    for t in records {
        if !seen.insert(t.id) {
            rows.push(vec!["duplicate_id".into(), t.id.to_string()]);
        }
        match read_amount(&t.amount) {
            AmountReading::OutOfRange(_) => rows.push(vec![
                "amount_out_of_range".into(),
                format!("#{} '{}'", t.id, t.amount),
            ]),
            _ if !is_clean_amount(&t.amount) => rows.push(vec![
                "unparsable_amount".into(),
                format!("#{} '{}'", t.id, t.amount),
            ]),
            _ => {}
        }
        if t.status == Status::Unspecified {
            rows.push(vec!["unspecified_status".into(), format!("#{}", t.id)]);
        }
        if t.transaction_date.is_none() {
            rows.push(vec!["missing_date".into(), format!("#{}", t.id)]);
        }
    }
    rows
}

pub fn handle<K: KeyValueStore>(bridge: &PersistenceBridge<K>) -> Result<()> {
    let rows = issues(bridge)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
