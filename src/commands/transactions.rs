// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::balance::compute_balance;
use crate::db::KeyValueStore;
use crate::error::LedgerError;
use crate::filter::DateRange;
use crate::models::{NewTransaction, Status, Transaction};
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_optional_date, pretty_table};
use anyhow::{Context, Result};

pub fn handle<K: KeyValueStore>(
    store: &mut TransactionStore<K>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn range_from_args(sub: &clap::ArgMatches) -> Result<DateRange> {
    let start = parse_optional_date(sub.get_one::<String>("from")).context("--from")?;
    let end = parse_optional_date(sub.get_one::<String>("to")).context("--to")?;
    Ok(DateRange::new(start, end))
}

pub fn new_from_args(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let description = sub
        .get_one::<String>("desc")
        .cloned()
        .unwrap_or_default();
    let amount = sub
        .get_one::<String>("amount")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let status = match sub.get_one::<String>("status") {
        Some(s) => s.parse::<Status>()?,
        None => Status::Unspecified,
    };
    let transaction_date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    Ok(NewTransaction {
        description,
        amount,
        status,
        transaction_date,
    })
}

/// Starts from the stored record and overwrites whichever fields were given.
pub fn edited(existing: &Transaction, sub: &clap::ArgMatches) -> Result<Transaction> {
    let mut t = existing.clone();
    if let Some(d) = sub.get_one::<String>("desc") {
        t.description = d.clone();
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        t.amount = a.trim().to_string();
    }
    if let Some(s) = sub.get_one::<String>("status") {
        t.status = s.parse()?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        t.transaction_date = Some(parse_date(d)?);
    }
    Ok(t)
}

fn add<K: KeyValueStore>(store: &mut TransactionStore<K>, sub: &clap::ArgMatches) -> Result<()> {
    let new = new_from_args(sub)?;
    let t = store.create(new)?;
    println!(
        "Recorded #{} {} {} on {} '{}'",
        t.id,
        t.status,
        t.amount,
        t.date_text(),
        t.description
    );
    Ok(())
}

fn edit<K: KeyValueStore>(store: &mut TransactionStore<K>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let existing = store.get(id).ok_or(LedgerError::NotFound(id))?;
    let updated = edited(existing, sub)?;
    store.update(updated)?;
    println!("Updated transaction #{}", id);
    Ok(())
}

pub fn query_rows<K: KeyValueStore>(
    store: &TransactionStore<K>,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let range = range_from_args(sub)?;
    Ok(store.visible(&range))
}

pub fn table_rows(data: &[Transaction]) -> Vec<Vec<String>> {
    data.iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.description.clone(),
                t.amount.clone(),
                t.status.to_string(),
                t.date_text(),
            ]
        })
        .collect()
}

fn list<K: KeyValueStore>(store: &TransactionStore<K>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &["ID", "Description", "Amount", "Status", "Date"],
                table_rows(&data),
            )
        );
        println!("Total: {}", fmt_money(&compute_balance(&data)));
    }
    Ok(())
}

fn show<K: KeyValueStore>(store: &TransactionStore<K>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let t = store.get(id).ok_or(LedgerError::NotFound(id))?;
    if !maybe_print_json(sub.get_flag("json"), false, t)? {
        println!(
            "{}",
            pretty_table(
                &["ID", "Description", "Amount", "Status", "Date"],
                table_rows(std::slice::from_ref(t)),
            )
        );
    }
    Ok(())
}
