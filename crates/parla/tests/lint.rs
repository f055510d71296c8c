//! Tests for static catalog lints.

use parla::{Catalog, LintWarning, lint_catalog};

#[test]
fn clean_catalog_has_no_warnings() {
    let mut catalog = Catalog::new();
    catalog.insert("hello", "Hello!");
    catalog.insert_plural("items", [("1", "one item"), ("n", "{n} items")]);
    catalog.insert_plural("files", [("one", "{n} file"), ("other", "{n} files"), ("n", "{n} files")]);
    assert!(lint_catalog(&catalog).is_empty());
}

#[test]
fn missing_default_and_unknown_selector() {
    let mut catalog = Catalog::new();
    catalog.insert_plural("things", [("1", "one"), ("lots", "lots")]);
    assert_eq!(
        lint_catalog(&catalog),
        vec![
            LintWarning::MissingDefault {
                key: "things".into()
            },
            LintWarning::UnknownSelector {
                key: "things".into(),
                selector: "lots".into()
            },
        ]
    );
}

#[test]
fn empty_templates() {
    let mut catalog = Catalog::new();
    catalog.insert("blank", "");
    catalog.insert_plural("items", [("0", ""), ("n", "{n} items")]);
    assert_eq!(
        lint_catalog(&catalog),
        vec![
            LintWarning::EmptyTemplate {
                key: "blank".into()
            },
            LintWarning::EmptyTemplate {
                key: "items.0".into()
            },
        ]
    );
}

#[test]
fn placeholder_used_by_single_variant() {
    let mut catalog = Catalog::new();
    catalog.insert_plural("posts", [("1", "one post"), ("n", "{n} posts by {author}")]);
    let warnings = lint_catalog(&catalog);
    assert_eq!(warnings.len(), 1);
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"plural entry 'posts' variant 'n' uses '{author}' which no other variant uses"
    );
}

#[test]
fn warnings_are_ordered_by_key() {
    let mut catalog = Catalog::new();
    catalog.insert("b", "");
    catalog.insert("a", "");
    catalog.insert("c", "");
    let keys: Vec<String> = lint_catalog(&catalog)
        .into_iter()
        .map(|w| match w {
            LintWarning::EmptyTemplate { key } => key,
            other => panic!("unexpected warning {other:?}"),
        })
        .collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn unusable_json_entries_are_reported() {
    let catalog = Catalog::from_json_str(r#"{ "hello": "Hello!", "module": { "key": { "deep": "v" } }, "n": 5 }"#)
        .unwrap();
    assert_eq!(
        lint_catalog(&catalog),
        vec![
            LintWarning::UnusableEntry {
                key: "module".into(),
                found: "plural variant 'key' is an object".into()
            },
            LintWarning::UnusableEntry {
                key: "n".into(),
                found: "a number".into()
            },
        ]
    );
    insta::assert_snapshot!(
        lint_catalog(&catalog)[1].to_string(),
        @"entry 'n' always falls back to its key: found a number"
    );
}
