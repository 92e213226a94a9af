// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LedgerError;

/// Direction of a transaction. Anything other than `credit` or `debit` read
/// back from storage is kept as `Unspecified` and written out as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    Credit,
    Debit,
    #[default]
    Unspecified,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Credit => "credit",
            Status::Debit => "debit",
            Status::Unspecified => "",
        }
    }

    /// Lenient mapping used at the storage boundary.
    pub fn from_stored(s: &str) -> Self {
        s.parse().unwrap_or(Status::Unspecified)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" => Ok(Status::Credit),
            "debit" => Ok(Status::Debit),
            _ => Err(LedgerError::InvalidStatus(s.to_string())),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Status::from_stored(&s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: String, // verbatim user text, parsed at aggregation time
    #[serde(default)]
    pub status: Status,
    /// `None` for a record saved before a date was picked; written as `""`.
    #[serde(default, with = "date_field")]
    pub transaction_date: Option<NaiveDate>,
}

impl Transaction {
    pub fn date_text(&self) -> String {
        self.transaction_date
            .map(|d| d.to_string())
            .unwrap_or_default()
    }
}

/// `YYYY-MM-DD` or `""`. Text that is not a date reads back as no date rather
/// than failing the whole list.
mod date_field {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
    }
}

/// Field values for a record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: String,
    pub status: Status,
    pub transaction_date: NaiveDate,
}

impl NewTransaction {
    pub fn with_id(self, id: i64) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            status: self.status,
            transaction_date: Some(self.transaction_date),
        }
    }
}
