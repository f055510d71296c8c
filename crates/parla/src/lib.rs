//! Translation key resolution with plural variants and `{name}` placeholders.
//!
//! A [`Translator`] holds the active [`Catalog`] (key to template or plural
//! map), resolution [`Options`], and a cache of tokenized templates. Lookups
//! never fail: missing keys, plural forms, and replacement values degrade to
//! visible fallbacks, with diagnostics in debug mode.

pub mod interpreter;
pub mod parser;
pub mod types;

#[cfg(feature = "global")]
mod global;

pub use interpreter::{
    Diagnostic, LintWarning, LoadError, ResolveContext, TemplateCache, Translator, assemble,
    cldr_pluralizer, compute_suggestions, lint_catalog, plural_category, resolve_plural,
};
pub use parser::{Segment, Template, tokenize};
pub use types::{Catalog, Entry, Options, PluralMap, Pluralizer, Replacements, Selector, Value};

#[cfg(feature = "global")]
pub use global::{
    configure, set_language, translate, translate_count, translate_count_with, translate_with,
    with_translator, with_translator_mut,
};

/// Creates a [`Replacements`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so you can pass integers, floats,
/// or strings directly.
///
/// # Example
///
/// ```
/// use parla::replacements;
///
/// let r = replacements! { "count" => 3, "name" => "Ada" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r["count"].as_number(), Some(3));
/// assert_eq!(r["name"].as_string(), Some("Ada"));
/// ```
#[macro_export]
macro_rules! replacements {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
