// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::error::Error;
use crate::store::{Presenter, Store};
use crate::transfer::import_json;
use anyhow::{Context, Result};

pub fn handle<K: KeyValueStore, P: Presenter>(
    store: &mut Store<K, P>,
    m: &clap::ArgMatches,
) -> Result<usize> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let text = std::fs::read_to_string(path).with_context(|| format!("Open JSON {}", path))?;

    let count = import_json(store, &text).map_err(|err| match err {
        Error::InvalidJson(_) => anyhow::Error::new(err).context("Could not read the JSON file"),
        Error::NotAnArray | Error::Validation { .. } => {
            anyhow::Error::new(err).context("The JSON file does not have the expected format")
        }
        other => anyhow::Error::new(other).context("Import failed"),
    })?;
    println!("Imported {} transactions from {}", count, path);
    Ok(count)
}
