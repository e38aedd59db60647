//! History export written to disk and read back.

mod common;

use chrono::NaiveDate;
use common::peru;
use countryline::repl::views::export_history;
use countryline::{CountryCode, CountryInfo, HistoryStore};
use std::fs;

#[test]
fn exported_file_reproduces_every_entry_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resultados_paises.txt");

    let mut store = HistoryStore::new();
    let stamp = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(18, 4, 5)
        .unwrap();
    store.record_at(CountryCode::parse("PE").unwrap(), peru(), stamp);
    store.record_at(
        CountryCode::parse("AQ").unwrap(),
        CountryInfo::named("Antarctica"),
        stamp,
    );

    let written = export_history(store.entries(), &path).expect("export succeeds");
    assert_eq!(written, 2);

    let contents = fs::read_to_string(&path).unwrap();
    for entry in store.entries() {
        let info = &entry.info;
        assert!(contents.contains(&format!("Código: {}\n", entry.code)));
        assert!(contents.contains(&format!("Fecha: {}\n", entry.timestamp_display())));
        assert!(contents.contains(&format!("País: {}\n", info.name)));
        assert!(contents.contains(&format!("Capital: {}\n", info.capital)));
        assert!(contents.contains(&format!("Moneda: {}\n", info.currency)));
        assert!(contents.contains(&format!("Idiomas: {}\n", info.languages_joined())));
        assert!(contents.contains(&format!("Código telefónico: {}\n", info.phone_display())));
        assert!(contents.contains(&format!("Continente: {}\n", info.continent)));
    }
    assert!(contents.contains("Fecha: 2024-03-09 18:04:05\n"));
    assert!(contents.contains("Bandera: http://www.oorsprong.org/WebSamples.CountryInfo/Flags/Peru.jpg\n"));
}

#[test]
fn export_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resultados_paises.txt");
    fs::write(&path, "stale contents that must disappear").unwrap();

    let mut store = HistoryStore::new();
    store.record(CountryCode::parse("PE").unwrap(), peru());
    export_history(store.entries(), &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("stale"));
    assert!(contents.contains("País: Peru"));
}

#[test]
fn only_last_ten_lookups_are_exported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut store = HistoryStore::new();
    for i in 0..11 {
        store.record(
            CountryCode::parse(&format!("C{}", i)).unwrap(),
            CountryInfo::named(format!("Country {}", i)),
        );
    }

    assert_eq!(export_history(store.entries(), &path).unwrap(), 10);
    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("Código: C0\n"));
    assert!(contents.contains("Código: C10\n"));
}
