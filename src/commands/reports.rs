// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::balance::{summarize, BalanceSummary};
use crate::commands::transactions::range_from_args;
use crate::db::KeyValueStore;
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn summary<K: KeyValueStore>(
    store: &TransactionStore<K>,
    sub: &clap::ArgMatches,
) -> Result<BalanceSummary> {
    let range = range_from_args(sub)?;
    Ok(summarize(&store.visible(&range)))
}

pub fn balance<K: KeyValueStore>(store: &TransactionStore<K>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = summary(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![vec![
            s.count.to_string(),
            fmt_money(&s.credits),
            fmt_money(&s.debits),
            fmt_money(&s.balance),
        ]];
        println!(
            "{}",
            pretty_table(&["Transactions", "Credits", "Debits", "Balance"], rows)
        );
    }
    Ok(())
}
