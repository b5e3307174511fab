// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    #[serde(with = "amount")]
    pub amount: Decimal,
    pub category: String,
}

impl Transaction {
    /// Zero counts as income; only negative amounts are expenses.
    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme '{}' (use dark|light)", other)),
        }
    }
}

/// Parses user-typed amounts: plain decimals or scientific notation.
/// Returns `None` for anything that is not a finite number, or that would
/// not read back unchanged once stored as a JSON number.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
        .map(|d| d.normalize())
        .filter(amount::is_exact)
}

/// Amounts travel as JSON numbers (IEEE doubles). Only decimals that survive
/// `Decimal -> f64 -> Decimal` unchanged are ever held, so what is stored is
/// exactly what is in memory. Whole values are written as integers so `1000`
/// stays `1000` rather than `1000.0`.
pub mod amount {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(d: &Decimal, s: S) -> Result<S::Ok, S::Error> {
        if d.fract().is_zero() {
            if let Some(i) = d.to_i64() {
                return s.serialize_i64(i);
            }
        }
        match to_f64(d) {
            Some(f) => s.serialize_f64(f),
            None => Err(ser::Error::custom(format!("amount {} is out of range", d))),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
        let raw = f64::deserialize(d)?;
        from_f64(raw).ok_or_else(|| de::Error::custom(format!("amount {} is out of range", raw)))
    }

    /// Nearest double, going through text so the rounding is exact.
    pub fn to_f64(d: &Decimal) -> Option<f64> {
        d.to_string().parse::<f64>().ok().filter(|f| f.is_finite())
    }

    /// The decimal a double stands for. `None` when it is not finite, falls
    /// outside the `Decimal` range, or needs more digits than `Decimal` keeps
    /// (`1e300`, `1e-40`).
    pub fn from_f64(raw: f64) -> Option<Decimal> {
        if !raw.is_finite() {
            return None;
        }
        // f64 display never uses exponents.
        let d = Decimal::from_str(&raw.to_string()).ok()?.normalize();
        (to_f64(&d) == Some(raw)).then_some(d)
    }

    pub fn is_exact(d: &Decimal) -> bool {
        to_f64(d).and_then(from_f64) == Some(*d)
    }
}
