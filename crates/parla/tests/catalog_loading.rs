//! Tests for loading catalogs from JSON.

use std::fs;

use parla::{Catalog, Diagnostic, Entry, LoadError, Options, Translator};
use tempfile::TempDir;

const EN: &str = r#"{
    "hello": "Hello!",
    "items": { "1": "one item", "n": "{n} items" }
}"#;

#[test]
fn load_from_str() {
    let catalog = Catalog::from_json_str(EN).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("hello").and_then(Entry::as_literal), Some("Hello!"));
    let items = catalog.get("items").and_then(Entry::as_plural).unwrap();
    assert_eq!(items.get("1").map(String::as_str), Some("one item"));
    assert_eq!(items.get("n").map(String::as_str), Some("{n} items"));
}

#[test]
fn load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.json");
    fs::write(&path, EN).unwrap();

    let mut translator = Translator::new();
    let catalog = Catalog::from_json_file(&path).unwrap();
    translator.set_language(|| catalog);
    assert_eq!(translator.t_count("items", 4), "4 items");
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn syntax_error_reports_position() {
    let err = Catalog::from_json_str("{\n  \"a\": \"b\",\n  oops\n}").unwrap_err();
    match err {
        LoadError::Json { line, column, .. } => {
            assert_eq!(line, 3);
            assert!(column > 0);
        }
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[test]
fn unusable_entries_load_and_fall_back_to_key() {
    let catalog = Catalog::from_json_str(r#"{"a":"x","mod":{"k":{"deep":"v"}},"num":5}"#).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.get("num"),
        Some(&Entry::Unusable("a number".to_string()))
    );

    let translator = Translator::with_catalog(catalog);
    assert_eq!(translator.t("a"), "x");
    assert_eq!(translator.t("mod"), "mod");
    assert_eq!(translator.t_count("mod", 2), "mod");
    assert_eq!(translator.t("num"), "num");
}

#[test]
fn unusable_plural_variant_is_described() {
    let catalog = Catalog::from_json_str(r#"{ "items": { "n": ["x"] } }"#).unwrap();
    let entry = catalog.get("items").unwrap();
    assert_eq!(entry.as_plural(), None);
    insta::assert_debug_snapshot!(entry, @r#"
    Unusable(
        "plural variant 'n' is an array",
    )
    "#);
}

#[test]
fn unusable_entry_is_marked_in_debug_mode() {
    let catalog = Catalog::from_json_str(r#"{ "flag": true }"#).unwrap();
    let translator = Translator::builder()
        .options(Options::builder().debug(true).build())
        .catalog(catalog)
        .build();
    let (text, diagnostics) = translator.resolve_with_diagnostics("flag", None, None);
    assert_eq!(text, "@@flag@@");
    assert!(matches!(
        diagnostics.as_slice(),
        [Diagnostic::MissingTranslation { key, .. }] if key == "flag"
    ));
}

#[test]
fn top_level_must_be_object() {
    let err = Catalog::from_json_str(r#"["a"]"#).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn deserialize_matches_json_loader() {
    let json = r#"{ "a": "x", "items": { "n": "{n}" }, "list": [1] }"#;
    let decoded: Catalog = serde_json::from_str(json).unwrap();
    assert_eq!(decoded, Catalog::from_json_str(json).unwrap());
    assert_eq!(decoded.get("list"), Some(&Entry::Unusable("an array".to_string())));
}

#[test]
fn from_iterator_builds_catalog() {
    let catalog: Catalog = [("a", Entry::from("A")), ("b", Entry::from("B"))]
        .into_iter()
        .collect();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains_key("a"));
    let mut keys: Vec<&str> = catalog.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b"]);
}
