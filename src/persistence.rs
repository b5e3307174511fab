// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reads and writes the transaction list and the theme preference.

use crate::db::KeyValueStore;
use crate::error::{Error, Result};
use crate::models::{Theme, Transaction};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const THEME_KEY: &str = "theme";

pub fn save<K: KeyValueStore + ?Sized>(kv: &mut K, list: &[Transaction]) -> Result<()> {
    let text = serde_json::to_string(list).map_err(Error::Encode)?;
    kv.set(TRANSACTIONS_KEY, &text)
}

/// An absent key is an empty list; a present but unreadable one is an error.
pub fn load<K: KeyValueStore + ?Sized>(kv: &K) -> Result<Vec<Transaction>> {
    match kv.get(TRANSACTIONS_KEY)? {
        Some(text) => serde_json::from_str(&text).map_err(Error::Corrupt),
        None => Ok(Vec::new()),
    }
}

pub fn clear_key<K: KeyValueStore + ?Sized>(kv: &mut K) -> Result<()> {
    kv.remove(TRANSACTIONS_KEY)
}

pub fn load_theme<K: KeyValueStore + ?Sized>(kv: &K) -> Result<Theme> {
    let theme = match kv.get(THEME_KEY)?.as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    };
    Ok(theme)
}

pub fn save_theme<K: KeyValueStore + ?Sized>(kv: &mut K, theme: Theme) -> Result<()> {
    kv.set(THEME_KEY, theme.as_str())
}
