// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::store::{Presenter, Store};
use crate::transfer::ExportFormat;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

pub fn handle<K: KeyValueStore, P: Presenter>(
    store: &Store<K, P>,
    m: &clap::ArgMatches,
) -> Result<PathBuf> {
    let fmt: ExportFormat = m
        .get_one::<String>("format")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let out = m
        .get_one::<String>("out")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fmt.file_name()));

    let body = fmt.render(store.transactions())?;
    std::fs::write(&out, body).with_context(|| format!("Write {}", out.display()))?;
    println!(
        "Exported {} transactions to {} ({})",
        store.transactions().len(),
        out.display(),
        fmt.mime()
    );
    Ok(out)
}
