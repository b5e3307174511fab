// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gastos::db::{MemoryStore, init_schema};
use gastos::persistence;
use gastos::store::Store;
use gastos::{cli, commands::importer};
use rusqlite::Connection;
use std::io::Write;
use tempfile::NamedTempFile;

fn json_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", body).unwrap();
    file.flush().unwrap();
    file
}

fn run_import<K: gastos::db::KeyValueStore>(
    store: &mut Store<K, ()>,
    path: &str,
) -> anyhow::Result<usize> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["gastos", "import", "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(store, import_m)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn importer_trims_cli_path_argument() {
    let mut store = Store::initialize(MemoryStore::new(), ()).unwrap();
    let file = json_file(r#"[{"id": 1, "description": "Shop", "amount": -5, "category": "Food"}]"#);
    let padded = format!("  {}  ", file.path().to_str().unwrap());

    assert_eq!(run_import(&mut store, &padded).unwrap(), 1);
    assert_eq!(store.transactions()[0].id, 1);
}

#[test]
fn importer_replaces_and_persists_to_sqlite() {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    let mut store = Store::initialize(conn, ()).unwrap();
    store.add("Old", "10", "Misc").unwrap();

    let file = json_file(
        r#"[
  {"id": 10, "description": "Gift", "amount": 50, "category": "Other"},
  {"id": 11, "description": "Taxi", "amount": -12.5, "category": "Transport"}
]"#,
    );
    run_import(&mut store, file.path().to_str().unwrap()).unwrap();

    let persisted = persistence::load(store.kv()).unwrap();
    assert_eq!(persisted.as_slice(), store.transactions());
    let ids: Vec<i64> = persisted.iter().map(|t| t.id).collect();
    assert_eq!(ids, [10, 11]);
}

#[test]
fn importer_reports_malformed_json() {
    let mut store = Store::initialize(MemoryStore::new(), ()).unwrap();
    store.add("Keep", "1", "Misc").unwrap();
    let file = json_file("{not valid json");

    let err = run_import(&mut store, file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Could not read the JSON file"));
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn importer_reports_wrong_shape() {
    let mut store = Store::initialize(MemoryStore::new(), ()).unwrap();
    store.add("Keep", "1", "Misc").unwrap();
    let file = json_file(r#"[{"description": "Gift", "amount": "50", "category": "Other"}]"#);

    let err = run_import(&mut store, file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("expected format"));
    assert_eq!(store.transactions()[0].description, "Keep");
}

#[test]
fn importer_fails_on_missing_file() {
    let mut store = Store::initialize(MemoryStore::new(), ()).unwrap();
    assert!(run_import(&mut store, "/definitely/not/here.json").is_err());
}
