// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static AMOUNT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d+)?(?:\.(\d*))?(?:[eE]([+-]?\d+))?").expect("static regex")
});

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_optional_date(s: Option<&String>) -> Result<Option<NaiveDate>> {
    s.map(|v| parse_date(v)).transpose()
}

/// How the leading number of some amount text reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountReading {
    /// No digits before the first non-numeric character.
    NoNumber,
    Number(Decimal),
    /// Beyond what `Decimal` holds; saturated to `Decimal::MAX` or `Decimal::MIN`.
    OutOfRange(Decimal),
}

pub fn read_amount(s: &str) -> AmountReading {
    let text = s.trim();
    let Some(caps) = AMOUNT_PREFIX.captures(text) else {
        return AmountReading::NoNumber;
    };
    let int_part = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let frac_part = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    if int_part.is_empty() && frac_part.is_empty() {
        return AmountReading::NoNumber;
    }
    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let mut normalized = format!("{}{}", if negative { "-" } else { "" }, int_part);
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    let exp = caps.get(4).map(|m| m.as_str());
    let parsed = match exp {
        Some(e) => Decimal::from_scientific(&format!("{}e{}", normalized, e)),
        None => normalized.parse::<Decimal>(),
    };
    if let Ok(d) = parsed {
        return AmountReading::Number(d);
    }
    let significant = int_part.trim_start_matches('0').len();
    if exp.is_none() && significant <= 28 && !frac_part.is_empty() {
        // too many fraction digits, not too large: keep what fits
        let keep = (28 - significant).min(frac_part.len());
        let short = format!("{}{}.{}", if negative { "-" } else { "" }, int_part, &frac_part[..keep]);
        if let Ok(d) = short.trim_end_matches('.').parse::<Decimal>() {
            return AmountReading::Number(d);
        }
    }
    let all_zero = int_part.chars().chain(frac_part.chars()).all(|c| c == '0');
    // a negative exponent that does not fit only means "too small to matter"
    if all_zero || exp.is_some_and(|e| e.starts_with('-')) {
        return AmountReading::Number(Decimal::ZERO);
    }
    AmountReading::OutOfRange(if negative { Decimal::MIN } else { Decimal::MAX })
}

/// Reads the leading number out of free-form amount text, the way a form
/// field is read: `"12.50"` is 12.50, `"12abc"` is 12, `""` and `"abc"` are 0.
/// Magnitudes past `Decimal`'s range saturate.
pub fn parse_amount(s: &str) -> Decimal {
    match read_amount(s) {
        AmountReading::NoNumber => Decimal::ZERO,
        AmountReading::Number(d) | AmountReading::OutOfRange(d) => d,
    }
}

/// Whether the text is a complete, in-range amount (no trailing junk).
pub fn is_clean_amount(s: &str) -> bool {
    let text = s.trim();
    let whole = AMOUNT_PREFIX
        .find(text)
        .is_some_and(|m| m.end() == text.len());
    whole && matches!(read_amount(text), AmountReading::Number(_))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
