// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Moves the full transaction list in and out of a [`KeyValueStore`].
//!
//! Everything lives under one key as a JSON array. Every save rewrites the
//! whole array.

use crate::db::KeyValueStore;
use crate::error::LedgerError;
use crate::models::Transaction;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CORRUPT_BACKUP_KEY: &str = "transactions.corrupt";

/// What is currently stored under [`TRANSACTIONS_KEY`].
#[derive(Debug)]
pub enum BlobState {
    Missing,
    Valid(Vec<Transaction>),
    Corrupt(serde_json::Error),
}

pub struct PersistenceBridge<K> {
    kv: K,
}

impl<K: KeyValueStore> PersistenceBridge<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn inspect(&self) -> Result<BlobState, LedgerError> {
        let raw = match self.kv.get(TRANSACTIONS_KEY)? {
            Some(raw) => raw,
            None => return Ok(BlobState::Missing),
        };
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(records) => Ok(BlobState::Valid(records)),
            Err(e) => Ok(BlobState::Corrupt(e)),
        }
    }

    /// Reads the stored records. A blob that does not parse is copied to
    /// [`CORRUPT_BACKUP_KEY`] and an empty list is returned.
    pub fn load(&mut self) -> Result<Vec<Transaction>, LedgerError> {
        match self.inspect()? {
            BlobState::Missing => {
                tracing::debug!("no stored transactions, starting empty");
                Ok(Vec::new())
            }
            BlobState::Valid(records) => {
                tracing::debug!(count = records.len(), "loaded transactions");
                Ok(records)
            }
            BlobState::Corrupt(err) => {
                if let Some(raw) = self.kv.get(TRANSACTIONS_KEY)? {
                    self.kv.set(CORRUPT_BACKUP_KEY, &raw)?;
                }
                tracing::warn!(
                    error = %err,
                    backup = CORRUPT_BACKUP_KEY,
                    "stored transactions are unreadable, starting with an empty ledger"
                );
                Ok(Vec::new())
            }
        }
    }

    pub fn save(&mut self, records: &[Transaction]) -> Result<(), LedgerError> {
        let text = serde_json::to_string(records)?;
        self.kv.set(TRANSACTIONS_KEY, &text)?;
        tracing::debug!(count = records.len(), bytes = text.len(), "saved transactions");
        Ok(())
    }
}
