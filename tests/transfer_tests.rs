// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gastos::db::MemoryStore;
use gastos::store::Store;
use gastos::transfer::{ExportFormat, import_json, parse_import, to_csv, to_json};
use gastos::utils::fmt_money;
use gastos::Error;

fn seeded() -> Store<MemoryStore, ()> {
    let mut store = Store::initialize(MemoryStore::new(), ()).unwrap();
    store.add("Salary", "1000", "Job").unwrap();
    store.add("Rent", "-400.75", "Housing").unwrap();
    store.add("Dinner \"La Casa\"", "-35", "Food").unwrap();
    store
}

#[test]
fn csv_quotes_text_and_leaves_amounts_bare() {
    let store = seeded();
    let csv_text = to_csv(store.transactions());
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines[0], "Descripción,Cantidad,Categoría");
    assert_eq!(lines[1], "\"Salary\",1000,\"Job\"");
    assert_eq!(lines[2], "\"Rent\",-400.75,\"Housing\"");
    assert!(csv_text.ends_with('\n'));

    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[2][0], "Dinner \"La Casa\"");
    assert_eq!(&rows[2][1], "-35");
}

#[test]
fn csv_of_empty_list_is_just_the_header() {
    assert_eq!(to_csv(&[]), "Descripción,Cantidad,Categoría\n");
}

#[test]
fn json_export_round_trips_through_import() {
    let store = seeded();
    let text = to_json(store.transactions()).unwrap();
    assert!(text.starts_with("[\n  {"));

    let mut other = Store::initialize(MemoryStore::new(), ()).unwrap();
    other.add("Old", "1", "x").unwrap();
    assert_eq!(import_json(&mut other, &text).unwrap(), 3);
    assert_eq!(other.transactions(), store.transactions());
}

#[test]
fn import_of_single_gift() {
    let mut store = Store::initialize(MemoryStore::new(), ()).unwrap();
    let text = "[{\"description\":\"Gift\",\"amount\":50,\"category\":\"Other\"}]";
    import_json(&mut store, text).unwrap();
    assert_eq!(store.transactions().len(), 1);
    let t = &store.transactions()[0];
    assert_eq!(t.description, "Gift");
    assert_eq!(t.category, "Other");
    assert_eq!(fmt_money(&store.snapshot().balance), "50.00");
}

#[test]
fn malformed_import_leaves_store_alone() {
    let mut store = seeded();
    let before = store.transactions().to_vec();
    let err = import_json(&mut store, "{not valid json").unwrap_err();
    assert!(matches!(err, Error::InvalidJson(_)));
    assert_eq!(store.transactions(), before.as_slice());
}

#[test]
fn non_array_import_is_a_shape_error() {
    assert!(matches!(
        parse_import("{\"description\":\"Gift\"}"),
        Err(Error::NotAnArray)
    ));
    let mut store = seeded();
    let err = import_json(&mut store, "[{\"description\":\"Gift\",\"amount\":5}]").unwrap_err();
    assert!(matches!(err, Error::Validation { index: 0, .. }));
    assert_eq!(store.transactions().len(), 3);
}

#[test]
fn export_format_parsing_and_file_names() {
    assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert!("xml".parse::<ExportFormat>().is_err());
    assert_eq!(ExportFormat::Csv.file_name(), "transacciones.csv");
    assert_eq!(ExportFormat::Json.mime(), "application/json");
}

#[test]
fn csv_writes_large_and_fine_amounts_in_plain_notation() {
    let mut store = Store::initialize(MemoryStore::new(), ()).unwrap();
    store.add("Big", "1e20", "x").unwrap().unwrap();
    store.add("Fine", "-0.0000000001", "x").unwrap().unwrap();
    let csv_text = to_csv(store.transactions());
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines[1], "\"Big\",100000000000000000000,\"x\"");
    assert_eq!(lines[2], "\"Fine\",-0.0000000001,\"x\"");
}
