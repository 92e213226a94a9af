// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::models::Transaction;

/// Inclusive calendar-date window. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }

    /// An undated record only shows up when the range has no bounds at all.
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        match date {
            Some(d) => self.contains(d),
            None => self.is_unbounded(),
        }
    }

    pub fn apply(&self, records: &[Transaction]) -> Vec<Transaction> {
        records
            .iter()
            .filter(|t| self.admits(t.transaction_date))
            .cloned()
            .collect()
    }
}

pub fn filter_by_range(
    records: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    DateRange::between(start, end).apply(records)
}
