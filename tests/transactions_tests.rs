// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gastos::db::MemoryStore;
use gastos::render::TerminalView;
use gastos::store::Store;
use gastos::{cli, commands::transactions};
use std::io::Cursor;

fn setup() -> Store<MemoryStore, TerminalView> {
    Store::initialize(MemoryStore::new(), TerminalView::default()).unwrap()
}

fn run(store: &mut Store<MemoryStore, TerminalView>, args: &[&str]) {
    let mut argv = vec!["gastos", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(store, tx_m).unwrap();
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_accepts_negative_amounts() {
    let mut store = setup();
    run(&mut store, &["add", "-d", "Salary", "-a", "1000", "-c", "Job"]);
    run(
        &mut store,
        &["add", "--description", "Rent", "--amount", "-400", "--category", "Housing"],
    );
    assert_eq!(store.transactions().len(), 2);
    assert!(store.transactions()[1].is_expense());
    assert_eq!(
        store.presenter().balance_line().unwrap(),
        "Balance: 600.00"
    );
}

#[test]
fn add_with_unparseable_amount_records_nothing() {
    let mut store = setup();
    run(&mut store, &["add", "-d", "Salary", "-a", "lots", "-c", "Job"]);
    assert!(store.transactions().is_empty());
}

#[test]
fn rm_removes_by_id_and_ignores_unknown_ids() {
    let mut store = setup();
    let id = store.add("Salary", "1000", "Job").unwrap().unwrap();
    run(&mut store, &["rm", "--id", "12345"]);
    assert_eq!(store.transactions().len(), 1);
    run(&mut store, &["rm", "--id", &id.to_string()]);
    assert!(store.transactions().is_empty());
}

#[test]
fn list_frame_shows_rows_balance_and_chart() {
    let mut store = setup();
    store.add("Salary", "1000", "Job").unwrap();
    store.add("Rent", "-400", "Housing").unwrap();
    run(&mut store, &["list"]);

    let frame = store.presenter().frame().unwrap();
    assert!(frame.contains("Salary"));
    assert!(frame.contains("-400.00"));
    assert!(frame.contains("Gasto"));
    assert!(frame.contains("Balance: 600.00"));
    assert!(frame.contains("Balance disponible"));
}

fn clear_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["gastos", "tx", "clear"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let tx_m = matches.subcommand_matches("tx").unwrap();
    tx_m.subcommand_matches("clear").unwrap().clone()
}

#[test]
fn clear_requires_confirmation() {
    let mut store = setup();
    store.add("Salary", "1000", "Job").unwrap();

    let m = clear_matches(&[]);
    let mut out = Vec::new();
    let cleared = transactions::clear(&mut store, &m, &mut Cursor::new("n\n"), &mut out).unwrap();
    assert!(!cleared);
    assert_eq!(store.transactions().len(), 1);
    assert!(String::from_utf8(out).unwrap().contains("[y/N]"));

    let cleared =
        transactions::clear(&mut store, &m, &mut Cursor::new("yes\n"), &mut Vec::new()).unwrap();
    assert!(cleared);
    assert!(store.transactions().is_empty());
}

#[test]
fn clear_with_yes_flag_skips_prompt() {
    let mut store = setup();
    store.add("Salary", "1000", "Job").unwrap();
    let m = clear_matches(&["--yes"]);
    let mut out = Vec::new();
    assert!(transactions::clear(&mut store, &m, &mut Cursor::new(""), &mut out).unwrap());
    assert!(store.transactions().is_empty());
    assert!(!String::from_utf8(out).unwrap().contains("[y/N]"));
}
