//! Static lint rules for catalogs.
//!
//! Finds entries that resolve correctly today but degrade to a fallback for
//! some inputs: plural maps without an `n` variant, selectors no count or
//! CLDR category can ever match, and empty templates. Entries that can never
//! resolve are reported too.

use thiserror::Error;

use crate::parser::tokenize;
use crate::types::{Catalog, Entry, PluralMap, Selector};

/// CLDR plural category names, the only category selectors
/// [`cldr_pluralizer`](crate::cldr_pluralizer) produces.
const CLDR_CATEGORIES: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// A warning about a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// A plural map has no `n` fallback variant.
    #[error("plural entry '{key}' has no 'n' fallback variant")]
    MissingDefault { key: String },

    /// A plural selector is neither a count, a CLDR category, nor `n`.
    #[error("plural entry '{key}' has selector '{selector}' that is not a count or CLDR category")]
    UnknownSelector { key: String, selector: String },

    /// A value that is neither a template nor a map of template strings.
    #[error("entry '{key}' always falls back to its key: found {found}")]
    UnusableEntry { key: String, found: String },

    /// A template is the empty string.
    #[error("entry '{key}' has an empty template")]
    EmptyTemplate { key: String },

    /// A plural variant uses placeholders other than `n` that the other
    /// variants do not, so callers must always supply them anyway.
    #[error("plural entry '{key}' variant '{selector}' uses '{{{placeholder}}}' which no other variant uses")]
    LonePlaceholder {
        key: String,
        selector: String,
        placeholder: String,
    },
}

/// Runs lint rules over every catalog entry, returning warnings ordered by
/// key.
///
/// # Example
///
/// ```
/// use parla::{Catalog, LintWarning, lint_catalog};
///
/// let mut catalog = Catalog::new();
/// catalog.insert_plural("items", [("1", "one item")]);
///
/// assert_eq!(
///     lint_catalog(&catalog),
///     vec![LintWarning::MissingDefault { key: "items".into() }]
/// );
/// ```
pub fn lint_catalog(catalog: &Catalog) -> Vec<LintWarning> {
    let mut keys: Vec<&str> = catalog.keys().collect();
    keys.sort_unstable();

    let mut warnings = Vec::new();
    for key in keys {
        match catalog.get(key) {
            Some(Entry::Literal(template)) => {
                if template.is_empty() {
                    warnings.push(LintWarning::EmptyTemplate {
                        key: key.to_string(),
                    });
                }
            }
            Some(Entry::Plural(map)) => lint_plural(key, map, &mut warnings),
            Some(Entry::Unusable(found)) => warnings.push(LintWarning::UnusableEntry {
                key: key.to_string(),
                found: found.clone(),
            }),
            None => {}
        }
    }
    warnings
}

fn lint_plural(key: &str, map: &PluralMap, warnings: &mut Vec<LintWarning>) {
    if !map.contains_key(Selector::DEFAULT_KEY) {
        warnings.push(LintWarning::MissingDefault {
            key: key.to_string(),
        });
    }

    for (selector, template) in map {
        if !is_known_selector(selector) {
            warnings.push(LintWarning::UnknownSelector {
                key: key.to_string(),
                selector: selector.clone(),
            });
        }
        if template.is_empty() {
            warnings.push(LintWarning::EmptyTemplate {
                key: format!("{key}.{selector}"),
            });
        }
    }

    if map.len() > 1 {
        lint_lone_placeholders(key, map, warnings);
    }
}

fn lint_lone_placeholders(key: &str, map: &PluralMap, warnings: &mut Vec<LintWarning>) {
    let names: Vec<(&String, Vec<String>)> = map
        .iter()
        .map(|(selector, template)| {
            let template = tokenize(template);
            let names = template
                .placeholders()
                .filter(|name| *name != Selector::DEFAULT_KEY)
                .map(str::to_string)
                .collect();
            (selector, names)
        })
        .collect();

    for (selector, placeholders) in &names {
        for placeholder in placeholders {
            let shared = names
                .iter()
                .any(|(other, theirs)| other != selector && theirs.contains(placeholder));
            let warning = LintWarning::LonePlaceholder {
                key: key.to_string(),
                selector: (*selector).clone(),
                placeholder: placeholder.clone(),
            };
            if !shared && !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }
    }
}

fn is_known_selector(selector: &str) -> bool {
    selector == Selector::DEFAULT_KEY
        || CLDR_CATEGORIES.contains(&selector)
        || (!selector.is_empty() && selector.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_categories_and_n_are_known() {
        assert!(is_known_selector("0"));
        assert!(is_known_selector("12"));
        assert!(is_known_selector("few"));
        assert!(is_known_selector("n"));
        assert!(!is_known_selector("-1"));
        assert!(!is_known_selector("lots"));
        assert!(!is_known_selector(""));
    }
}
