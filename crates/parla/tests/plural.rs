//! Tests for plural variant selection.

use std::sync::Arc;

use parla::{
    Diagnostic, Options, PluralMap, ResolveContext, Selector, plural_category, resolve_plural,
};

fn map(entries: &[(&str, &str)]) -> PluralMap {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn many_above_one() -> Options {
    Options::builder()
        .pluralize(Arc::new(|n: u64, _: &PluralMap| {
            if n > 1 {
                Selector::category("many")
            } else {
                Selector::Count(n)
            }
        }))
        .build()
}

#[test]
fn exact_count_wins() {
    let m = map(&[("1", "one item"), ("n", "{n} items")]);
    let mut ctx = ResolveContext::new("items", Some(1), None, false);
    assert_eq!(resolve_plural(&m, 1, &Options::default(), &mut ctx), Some("one item"));
}

#[test]
fn negative_counts_use_magnitude() {
    let m = map(&[("1", "one item"), ("n", "{n} items")]);
    let mut ctx = ResolveContext::new("items", Some(-1), None, false);
    assert_eq!(resolve_plural(&m, -1, &Options::default(), &mut ctx), Some("one item"));
}

#[test]
fn zero_falls_back_to_n() {
    let m = map(&[("1", "one item"), ("n", "{n} items")]);
    let mut ctx = ResolveContext::new("items", Some(0), None, false);
    assert_eq!(resolve_plural(&m, 0, &Options::default(), &mut ctx), Some("{n} items"));
}

#[test]
fn exact_zero_variant() {
    let m = map(&[("0", "nothing"), ("n", "{n} items")]);
    let mut ctx = ResolveContext::new("items", Some(0), None, false);
    assert_eq!(resolve_plural(&m, 0, &Options::default(), &mut ctx), Some("nothing"));
}

#[test]
fn pluralizer_category_is_consulted() {
    let m = map(&[("1", "one"), ("many", "lots"), ("n", "fallback")]);
    let options = many_above_one();
    let mut ctx = ResolveContext::new("things", Some(10), None, false);
    assert_eq!(resolve_plural(&m, 10, &options, &mut ctx), Some("lots"));
}

#[test]
fn exact_count_beats_pluralizer() {
    let m = map(&[("10", "ten"), ("many", "lots")]);
    let options = many_above_one();
    let mut ctx = ResolveContext::new("things", Some(10), None, false);
    assert_eq!(resolve_plural(&m, 10, &options, &mut ctx), Some("ten"));
}

#[test]
fn unknown_category_falls_back_to_n() {
    let m = map(&[("1", "one"), ("n", "fallback")]);
    let options = many_above_one();
    let mut ctx = ResolveContext::new("things", Some(4), None, false);
    assert_eq!(resolve_plural(&m, 4, &options, &mut ctx), Some("fallback"));
}

#[test]
fn pluralizer_receives_magnitude_and_map() {
    let options = Options::builder()
        .pluralize(Arc::new(|n: u64, entry: &PluralMap| {
            assert_eq!(n, 3);
            assert!(entry.contains_key("odd"));
            Selector::category("odd")
        }))
        .build();
    let m = map(&[("odd", "odd one")]);
    let mut ctx = ResolveContext::new("parity", Some(-3), None, false);
    assert_eq!(resolve_plural(&m, -3, &options, &mut ctx), Some("odd one"));
}

#[test]
fn no_match_records_diagnostic_in_debug() {
    let m = map(&[("1", "one")]);
    let mut ctx = ResolveContext::new("things", Some(2), None, true);
    assert_eq!(resolve_plural(&m, 2, &Options::default(), &mut ctx), None);
    assert_eq!(
        ctx.diagnostics(),
        &[Diagnostic::MissingPluralForm {
            key: "things".into(),
            count: 2,
            available: vec!["1".into()],
        }]
    );
}

#[test]
fn no_match_is_silent_outside_debug() {
    let m = map(&[("1", "one")]);
    let mut ctx = ResolveContext::new("things", Some(2), None, false);
    assert_eq!(resolve_plural(&m, 2, &Options::default(), &mut ctx), None);
    assert!(ctx.diagnostics().is_empty());
}

// =============================================================================
// CLDR categories
// =============================================================================

#[test]
fn english_categories() {
    assert_eq!(plural_category("en", 0), "other");
    assert_eq!(plural_category("en", 1), "one");
    assert_eq!(plural_category("en-GB", 1), "one");
    assert_eq!(plural_category("en", 7), "other");
}

#[test]
fn russian_categories() {
    assert_eq!(plural_category("ru", 1), "one");
    assert_eq!(plural_category("ru", 21), "one");
    assert_eq!(plural_category("ru", 3), "few");
    assert_eq!(plural_category("ru", 11), "many");
}

#[test]
fn arabic_uses_zero_and_two() {
    assert_eq!(plural_category("ar", 0), "zero");
    assert_eq!(plural_category("ar", 2), "two");
}

#[test]
fn japanese_has_only_other() {
    assert_eq!(plural_category("ja", 1), "other");
    assert_eq!(plural_category("ja", 100), "other");
}
