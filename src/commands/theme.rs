// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::models::Theme;
use crate::persistence::{load_theme, save_theme};
use anyhow::{Result, anyhow};

/// The theme lives beside the transactions but never goes through the store.
pub fn handle<K: KeyValueStore>(kv: &mut K, m: &clap::ArgMatches) -> Result<Theme> {
    let theme = match m.subcommand() {
        Some(("set", sub)) => {
            let theme: Theme = sub
                .get_one::<String>("theme")
                .unwrap()
                .parse()
                .map_err(|e: String| anyhow!(e))?;
            save_theme(kv, theme)?;
            theme
        }
        Some(("toggle", _)) => {
            let theme = load_theme(kv)?.toggled();
            save_theme(kv, theme)?;
            theme
        }
        _ => load_theme(kv)?,
    };
    println!("Theme: {}", theme);
    Ok(theme)
}
