// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Status, Transaction};
use crate::utils::parse_amount;

/// Signed amount a record contributes: credits add, debits subtract.
pub fn signed_amount(t: &Transaction) -> Decimal {
    let amt = parse_amount(&t.amount);
    match t.status {
        Status::Credit => amt,
        Status::Debit => Decimal::ZERO.saturating_sub(amt),
        Status::Unspecified => Decimal::ZERO,
    }
}

/// Sums saturate at `Decimal::MAX`/`Decimal::MIN`, so any list of amounts
/// still yields a number.
pub fn compute_balance(records: &[Transaction]) -> Decimal {
    records
        .iter()
        .map(signed_amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceSummary {
    pub count: usize,
    pub credits: Decimal,
    pub debits: Decimal,
    pub balance: Decimal,
}

pub fn summarize(records: &[Transaction]) -> BalanceSummary {
    let mut credits = Decimal::ZERO;
    let mut debits = Decimal::ZERO;
    for t in records {
        let amt = parse_amount(&t.amount);
        match t.status {
            Status::Credit => credits = credits.saturating_add(amt),
            Status::Debit => debits = debits.saturating_add(amt),
            Status::Unspecified => {}
        }
    }
    BalanceSummary {
        count: records.len(),
        credits,
        debits,
        balance: credits.saturating_sub(debits),
    }
}
