// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::error::{Error, Result};
use crate::models::Transaction;
use crate::store::{Presenter, Store};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

pub const CSV_HEADER: &str = "Descripción,Cantidad,Categoría";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "transacciones.csv",
            ExportFormat::Json => "transacciones.json",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn render(self, list: &[Transaction]) -> Result<String> {
        match self {
            ExportFormat::Csv => Ok(to_csv(list)),
            ExportFormat::Json => to_json(list),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("Unknown format: {} (use csv|json)", other)),
        }
    }
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Text columns are always quoted; the amount is written bare.
pub fn to_csv(list: &[Transaction]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for t in list {
        out.push_str(&format!(
            "{},{},{}\n",
            quoted(&t.description),
            t.amount.normalize(),
            quoted(&t.category)
        ));
    }
    out
}

pub fn to_json(list: &[Transaction]) -> Result<String> {
    serde_json::to_string_pretty(list).map_err(Error::Encode)
}

/// Parses import text into raw records. Element shapes are checked later by
/// [`Store::replace_all`].
pub fn parse_import(text: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(text).map_err(Error::InvalidJson)? {
        Value::Array(items) => Ok(items),
        _ => Err(Error::NotAnArray),
    }
}

/// Replaces the store's contents with the transactions in `text`. On any
/// failure the store is left as it was.
pub fn import_json<K: KeyValueStore, P: Presenter>(
    store: &mut Store<K, P>,
    text: &str,
) -> Result<usize> {
    let outcome = parse_import(text).and_then(|records| store.replace_all(&records));
    if let Err(err) = &outcome {
        warn!(error = %err, "import rejected");
    }
    outcome
}
