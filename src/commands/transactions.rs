// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::render::TerminalView;
use crate::store::Store;
use crate::utils::{confirm, maybe_print_json};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub fn handle<K: KeyValueStore>(
    store: &mut Store<K, TerminalView>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("clear", sub)) => {
            let stdin = io::stdin();
            clear(store, sub, &mut stdin.lock(), &mut io::stdout())?;
        }
        _ => {}
    }
    Ok(())
}

fn add<K: KeyValueStore>(store: &mut Store<K, TerminalView>, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let amount = sub.get_one::<String>("amount").unwrap();
    let category = sub.get_one::<String>("category").unwrap();

    let added = store
        .add(description, amount, category)
        .context("Failed to record transaction")?;
    if let Some(id) = added {
        println!(
            "Recorded #{} '{}' {} ({})",
            id,
            description.trim(),
            amount.trim(),
            category.trim()
        );
    }
    print_balance(store);
    Ok(())
}

fn remove<K: KeyValueStore>(
    store: &mut Store<K, TerminalView>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.remove(id).context("Failed to remove transaction")? {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    print_balance(store);
    Ok(())
}

fn list<K: KeyValueStore>(store: &Store<K, TerminalView>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &store.transactions())? {
        if let Some(frame) = store.presenter().frame() {
            println!("{}", frame);
        }
    }
    Ok(())
}

/// Empties the store after confirmation; `--yes` skips the prompt.
pub fn clear<K: KeyValueStore, R: BufRead, W: Write>(
    store: &mut Store<K, TerminalView>,
    sub: &clap::ArgMatches,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let confirmed = sub.get_flag("yes")
        || confirm(
            "Delete ALL transactions? This cannot be undone.",
            input,
            output,
        )?;
    if !confirmed {
        writeln!(output, "Nothing deleted")?;
        return Ok(false);
    }
    store.clear().context("Failed to clear transactions")?;
    writeln!(output, "All transactions deleted")?;
    Ok(true)
}

fn print_balance<K: KeyValueStore>(store: &Store<K, TerminalView>) {
    if let Some(line) = store.presenter().balance_line() {
        println!("{}", line);
    }
}
