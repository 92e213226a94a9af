// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::models::{Status, Transaction};
use crate::store::TransactionStore;
use crate::utils::parse_date;
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

pub fn handle<K: KeyValueStore>(
    store: &mut TransactionStore<K>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let path = sub.get_one::<String>("file").unwrap().trim();
    let fmt = match sub.get_one::<String>("format") {
        Some(f) => f.to_lowercase(),
        None => Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json")
            .to_lowercase(),
    };
    let records = match fmt.as_str() {
        "json" => read_json(path)?,
        "csv" => read_csv(path)?,
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    };
    let count = records.len();
    store
        .replace(records)
        .with_context(|| format!("Import {}", path))?;
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}

pub fn read_json(path: &str) -> Result<Vec<Transaction>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Open JSON {}", path))?;
    let records: Vec<Transaction> =
        serde_json::from_str(&text).with_context(|| format!("Parse JSON {}", path))?;
    Ok(records)
}

/// Columns: id, description, amount, status, transaction_date. A blank id
/// takes the row's 1-based position; a blank date stays blank.
pub fn read_csv(path: &str) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut out = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        let id_raw = rec.get(0).unwrap_or("").trim();
        let id = if id_raw.is_empty() {
            idx as i64 + 1
        } else {
            id_raw
                .parse::<i64>()
                .with_context(|| format!("Invalid id '{}' on row {}", id_raw, idx + 1))?
        };
        let description = rec.get(1).unwrap_or("").to_string();
        let amount = rec.get(2).unwrap_or("").trim().to_string();
        let status = Status::from_stored(rec.get(3).unwrap_or(""));
        let date_raw = rec.get(4).context("transaction_date missing")?.trim();
        let transaction_date = if date_raw.is_empty() {
            None
        } else {
            Some(
                parse_date(date_raw)
                    .with_context(|| format!("Invalid transaction date on row {}", idx + 1))?,
            )
        };
        out.push(Transaction {
            id,
            description,
            amount,
            status,
            transaction_date,
        });
    }
    Ok(out)
}
