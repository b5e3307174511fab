// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::render::TerminalView;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json};
use anyhow::Result;

pub fn handle<K: KeyValueStore>(store: &Store<K, TerminalView>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balance", _)) => {
            println!("{}", fmt_money(&store.snapshot().balance));
        }
        Some(("summary", sub)) => summary(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<K: KeyValueStore>(store: &Store<K, TerminalView>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let chart = store.snapshot().chart;
    if !maybe_print_json(json_flag, jsonl_flag, &chart)? {
        if let Some(table) = store.presenter().chart_table() {
            println!("{}", table);
        }
    }
    Ok(())
}
