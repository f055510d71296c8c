//! Plural variant selection.
//!
//! [`resolve_plural`] picks one template out of a plural map for a count.
//! [`cldr_pluralizer`] provides a ready-made category function following CLDR
//! rules: English has "one" and "other", Russian has "one", "few", "many",
//! and "other", and Arabic uses all six categories.
//!
//! Plural rules are cached per thread per language to avoid re-creating
//! `PluralRules` instances on every call.

use std::cell::RefCell;
use std::sync::Arc;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::interpreter::{Diagnostic, ResolveContext};
use crate::types::{Options, PluralMap, Pluralizer, Selector};

/// Select the template for `count` out of a plural map.
///
/// Resolution order (first match wins):
/// 1. The variant keyed by the count's magnitude (`"1"` for both 1 and -1)
/// 2. The variant keyed by the configured pluralizer's selector
/// 3. The `n` fallback variant
///
/// Returns `None` if nothing matches, recording a
/// [`Diagnostic::MissingPluralForm`] in debug mode.
///
/// # Example
///
/// ```
/// use parla::{Options, PluralMap, ResolveContext, resolve_plural};
///
/// let map: PluralMap = [("1", "one item"), ("n", "{n} items")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let options = Options::default();
/// let mut ctx = ResolveContext::new("items", Some(-1), None, false);
///
/// assert_eq!(resolve_plural(&map, -1, &options, &mut ctx), Some("one item"));
/// assert_eq!(resolve_plural(&map, 7, &options, &mut ctx), Some("{n} items"));
/// ```
pub fn resolve_plural<'m>(
    map: &'m PluralMap,
    count: i64,
    options: &Options,
    ctx: &mut ResolveContext<'_>,
) -> Option<&'m str> {
    let magnitude = count.unsigned_abs();

    if let Some(template) = map.get(&Selector::Count(magnitude).as_key()) {
        return Some(template);
    }

    if let Some(pluralize) = options.pluralizer() {
        let selector = pluralize(magnitude, map);
        if let Some(template) = map.get(&selector.as_key()) {
            return Some(template);
        }
    }

    if let Some(template) = map.get(Selector::DEFAULT_KEY) {
        return Some(template);
    }

    let diagnostic = Diagnostic::MissingPluralForm {
        key: ctx.key().to_string(),
        count,
        available: map.keys().cloned().collect(),
    };
    ctx.add_diagnostic(diagnostic);
    None
}

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language tag to a supported static string reference.
///
/// Region and script subtags are ignored (`"pt-BR"` and `"pt_BR"` both map
/// to `"pt"`). Returns `"en"` for unrecognized languages.
fn normalize_lang(lang: &str) -> &'static str {
    let primary = lang.split(['-', '_']).next().unwrap_or(lang);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code.eq_ignore_ascii_case(primary))
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("compiled data covers every supported language")
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for a number in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
///
/// ```
/// use parla::plural_category;
///
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en", 2), "other");
/// assert_eq!(plural_category("ru", 2), "few");
/// assert_eq!(plural_category("ru", 5), "many");
/// ```
pub fn plural_category(lang: &str, n: u64) -> &'static str {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return category_str(entry.1.category_for(n));
        }
        let rules = build_rules(lang);
        let category = category_str(rules.category_for(n));
        cache.push((lang, rules));
        category
    })
}

/// A [`Pluralizer`] returning the CLDR category of the count for `lang`.
///
/// ```
/// use parla::{Catalog, Options, Translator, cldr_pluralizer};
///
/// let mut catalog = Catalog::new();
/// catalog.insert_plural("files", [("one", "{n} файл"), ("few", "{n} файла"), ("many", "{n} файлов")]);
///
/// let translator = Translator::builder()
///     .options(Options::builder().pluralize(cldr_pluralizer("ru")).build())
///     .catalog(catalog)
///     .build();
/// assert_eq!(translator.t_count("files", 3), "3 файла");
/// assert_eq!(translator.t_count("files", 11), "11 файлов");
/// ```
pub fn cldr_pluralizer(lang: &str) -> Pluralizer {
    let lang = normalize_lang(lang);
    Arc::new(move |n: u64, _: &PluralMap| Selector::category(plural_category(lang, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_region() {
        assert_eq!(normalize_lang("pt-BR"), "pt");
        assert_eq!(normalize_lang("de_AT"), "de");
        assert_eq!(normalize_lang("xx"), "en");
    }
}
