//! End-to-end tests for the file-backed quote store: load, mutate, persist.

use quote_core::QuoteError;
use quote_core::quote::{Quote, default_quotes};
use quote_core::storage::FileStorage;
use quote_core::store::QuoteStore;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> QuoteStore<FileStorage> {
    QuoteStore::load(FileStorage::open(dir.path()).unwrap()).unwrap()
}

#[test]
fn starts_from_defaults_without_persisting_them() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    assert_eq!(store.quotes(), default_quotes());
    assert!(!dir.path().join("quotesData.json").exists());
}

#[test]
fn add_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open_store(&dir);
        store.add("Stay hungry", "Life").unwrap();
    }
    let reopened = open_store(&dir);
    assert_eq!(reopened.quotes().len(), default_quotes().len() + 1);
    assert_eq!(
        reopened.quotes().last().unwrap(),
        &Quote::new("Stay hungry", "Life")
    );
}

#[test]
fn add_trims_fields_and_rejects_blank_input() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let added = store.add("  spaced  ", " Cat ").unwrap();
    assert_eq!(added, Quote::new("spaced", "Cat"));

    let err = store.add("   ", "Cat").unwrap_err();
    assert!(matches!(err, QuoteError::Format(_)));
    let err = store.add("text", "").unwrap_err();
    assert!(matches!(err, QuoteError::Format(_)));
}

#[test]
fn import_keeps_valid_entries_and_skips_the_rest() {
    let raw = r#"[
        {"text": "A", "category": "X"},
        {"text": 5, "category": "X"},
        "not an object",
        {"category": "X"},
        {"text": "B", "category": "Y"}
    ]"#;
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let count = store.import_json(raw).unwrap();
    assert_eq!(count, 2);

    let reopened = open_store(&dir);
    assert!(reopened.quotes().contains(&Quote::new("A", "X")));
    assert!(reopened.quotes().contains(&Quote::new("B", "Y")));
}

#[test]
fn import_rejects_bad_payloads_without_changes() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    let before = store.quotes().to_vec();

    assert!(store.import_json(r#"{"text": "A"}"#).is_err());
    assert!(store.import_json(r#"[{"text": 1}]"#).is_err());
    assert!(store.import_json("not json at all").is_err());
    assert_eq!(store.quotes(), before);
}

#[test]
fn export_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let raw = store.export_json().unwrap();
    let parsed: Vec<Quote> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, store.quotes());
}

#[test]
fn replace_persists_the_new_list() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open_store(&dir);
        store.replace(vec![Quote::new("only", "one")]).unwrap();
    }
    let reopened = open_store(&dir);
    assert_eq!(reopened.quotes(), vec![Quote::new("only", "one")]);
}

#[test]
fn selected_category_round_trips_and_clears_on_all() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    assert_eq!(store.selected_category().unwrap(), None);

    store.set_selected_category("Life").unwrap();
    assert_eq!(store.selected_category().unwrap(), Some("Life".to_string()));

    let mut reopened = open_store(&dir);
    assert_eq!(
        reopened.selected_category().unwrap(),
        Some("Life".to_string())
    );

    reopened.set_selected_category("all").unwrap();
    assert_eq!(reopened.selected_category().unwrap(), None);
}

#[test]
fn pick_random_honors_the_category_filter() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store
        .replace(vec![Quote::new("A", "X"), Quote::new("B", "Y")])
        .unwrap();

    for _ in 0..20 {
        let picked = store.pick_random(Some("X")).unwrap();
        assert_eq!(picked, &Quote::new("A", "X"));
    }
    assert!(store.pick_random(Some("missing")).is_none());
    assert!(store.pick_random(None).is_some());
}

#[test]
fn pick_random_on_an_empty_list_is_none() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.replace(Vec::new()).unwrap();
    assert!(store.pick_random(None).is_none());
}
