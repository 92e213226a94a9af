// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The in-memory list of transactions and the only place it is mutated.

use std::collections::HashSet;

use crate::db::{KeyValueStore, MemoryKv};
use crate::error::LedgerError;
use crate::filter::DateRange;
use crate::models::{NewTransaction, Transaction};
use crate::persistence::PersistenceBridge;

/// Owns the canonical transaction list. When opened over a
/// [`PersistenceBridge`] every mutation rewrites the stored copy; a
/// [`detached`](TransactionStore::detached) store never writes anywhere.
pub struct TransactionStore<K = MemoryKv> {
    records: Vec<Transaction>,
    bridge: Option<PersistenceBridge<K>>,
}

impl TransactionStore<MemoryKv> {
    pub fn detached() -> Self {
        Self {
            records: Vec::new(),
            bridge: None,
        }
    }
}

impl<K: KeyValueStore> TransactionStore<K> {
    /// Hydrates from the bridge. This is the only time the store reads storage.
    pub fn open(mut bridge: PersistenceBridge<K>) -> Result<Self, LedgerError> {
        let records = bridge.load()?;
        if let Some(dup) = first_duplicate_id(&records) {
            tracing::warn!(id = dup, "stored transactions contain a duplicate id");
        }
        Ok(Self {
            records,
            bridge: Some(bridge),
        })
    }

    pub fn list(&self) -> &[Transaction] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn bridge(&self) -> Option<&PersistenceBridge<K>> {
        self.bridge.as_ref()
    }

    /// `len + 1`, bumped past the largest id already present so that ids stay
    /// unique after a [`replace`](Self::replace).
    pub fn next_id(&self) -> i64 {
        let by_count = self.records.len() as i64;
        let max_id = self.records.iter().map(|t| t.id).max().unwrap_or(0);
        by_count.max(max_id) + 1
    }

    pub fn create(&mut self, new: NewTransaction) -> Result<Transaction, LedgerError> {
        let record = new.with_id(self.next_id());
        self.records.push(record.clone());
        tracing::debug!(id = record.id, "created transaction");
        self.persist()?;
        Ok(record)
    }

    /// Replaces the first record with a matching id. Returns `false`, touching
    /// nothing, when no record matches.
    pub fn update(&mut self, record: Transaction) -> Result<bool, LedgerError> {
        let Some(slot) = self.records.iter_mut().find(|t| t.id == record.id) else {
            tracing::debug!(id = record.id, "update ignored, no such transaction");
            return Ok(false);
        };
        *slot = record;
        tracing::debug!(id = slot.id, "updated transaction");
        self.persist()?;
        Ok(true)
    }

    pub fn replace(&mut self, records: Vec<Transaction>) -> Result<(), LedgerError> {
        if let Some(dup) = first_duplicate_id(&records) {
            return Err(LedgerError::DuplicateId(dup));
        }
        self.records = records;
        tracing::debug!(count = self.records.len(), "replaced transactions");
        self.persist()
    }

    /// Records inside `range`, in insertion order. The store is left as is.
    pub fn visible(&self, range: &DateRange) -> Vec<Transaction> {
        range.apply(&self.records)
    }

    fn persist(&mut self) -> Result<(), LedgerError> {
        match self.bridge.as_mut() {
            Some(bridge) => bridge.save(&self.records),
            None => Ok(()),
        }
    }
}

pub fn first_duplicate_id(records: &[Transaction]) -> Option<i64> {
    let mut seen = HashSet::new();
    records.iter().map(|t| t.id).find(|id| !seen.insert(*id))
}
