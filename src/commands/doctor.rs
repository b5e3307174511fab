// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::models::Transaction;
use crate::persistence::{THEME_KEY, TRANSACTIONS_KEY};
use crate::utils::pretty_table;
use anyhow::Result;
use std::collections::HashSet;

/// Inspects raw storage. Runs without initializing the store so it still
/// works when the stored list cannot be loaded.
pub fn diagnose<K: KeyValueStore>(kv: &K) -> Result<Vec<(String, String)>> {
    let mut rows = Vec::new();

    if let Some(text) = kv.get(TRANSACTIONS_KEY)? {
        match serde_json::from_str::<Vec<Transaction>>(&text) {
            Ok(list) => {
                let mut seen = HashSet::new();
                for t in &list {
                    if !seen.insert(t.id) {
                        rows.push(("duplicate_id".into(), t.id.to_string()));
                    }
                    if t.description.trim().is_empty() {
                        rows.push(("empty_description".into(), t.id.to_string()));
                    }
                    if t.category.trim().is_empty() {
                        rows.push(("empty_category".into(), t.id.to_string()));
                    }
                }
            }
            Err(err) => rows.push(("transactions_unreadable".into(), err.to_string())),
        }
    }

    if let Some(theme) = kv.get(THEME_KEY)? {
        if theme != "dark" && theme != "light" {
            rows.push(("unknown_theme".into(), theme));
        }
    }
    Ok(rows)
}

pub fn handle<K: KeyValueStore>(kv: &K) -> Result<()> {
    let rows = diagnose(kv)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = rows.into_iter().map(|(issue, detail)| vec![issue, detail]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
