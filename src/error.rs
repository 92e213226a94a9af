// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid status '{0}', expected credit or debit")]
    InvalidStatus(String),
    #[error("Duplicate transaction id {0}")]
    DuplicateId(i64),
    #[error("Transaction {0} not found")]
    NotFound(i64),
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
