// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::range_from_args;
use crate::db::KeyValueStore;
use crate::models::Transaction;
use crate::store::TransactionStore;
use anyhow::{bail, Result};
use std::path::Path;

pub const CSV_HEADER: [&str; 5] = ["id", "description", "amount", "status", "transaction_date"];

pub fn handle<K: KeyValueStore>(store: &TransactionStore<K>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let range = range_from_args(sub)?;
    let data = store.visible(&range);

    match fmt.as_str() {
        "csv" => write_csv(Path::new(out), &data)?,
        "json" => std::fs::write(out, serde_json::to_string_pretty(&data)?)?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    tracing::debug!(count = data.len(), out = %out, "exported transactions");
    println!("Exported {} transactions to {}", data.len(), out);
    Ok(())
}

fn write_csv(out: &Path, data: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(CSV_HEADER)?;
    for t in data {
        wtr.write_record([
            t.id.to_string(),
            t.description.clone(),
            t.amount.clone(),
            t.status.to_string(),
            t.date_text(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
