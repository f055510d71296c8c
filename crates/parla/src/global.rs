//! Default translator for the `global` feature.
//!
//! Provides a per-thread [`Translator`], removing the need to pass a
//! translator to every call site. Configuration and resolution are expected
//! to happen on the same thread.

use std::cell::RefCell;

use crate::{Catalog, Options, Replacements, Translator};

thread_local! {
    static GLOBAL_TRANSLATOR: RefCell<Translator> = RefCell::new(Translator::new());
}

/// Provides read access to the global translator.
pub fn with_translator<T>(f: impl FnOnce(&Translator) -> T) -> T {
    GLOBAL_TRANSLATOR.with_borrow(f)
}

/// Provides write access to the global translator.
pub fn with_translator_mut<T>(f: impl FnOnce(&mut Translator) -> T) -> T {
    GLOBAL_TRANSLATOR.with_borrow_mut(f)
}

/// Replaces the options of the global translator.
pub fn configure(options: Options) {
    with_translator_mut(|translator| translator.configure(options));
}

/// Replaces the catalog of the global translator.
///
/// The provider runs before the translator is borrowed, so it may itself
/// call [`translate`].
pub fn set_language(provider: impl FnOnce() -> Catalog) {
    let catalog = provider();
    with_translator_mut(|translator| translator.set_language(|| catalog));
}

/// Resolves a key with the global translator.
pub fn translate(key: &str) -> String {
    with_translator(|translator| translator.t(key))
}

/// Resolves a key with a quantity using the global translator.
pub fn translate_count(key: &str, count: i64) -> String {
    with_translator(|translator| translator.t_count(key, count))
}

/// Resolves a key with replacement values using the global translator.
pub fn translate_with(key: &str, replacements: &Replacements) -> String {
    with_translator(|translator| translator.t_with(key, replacements))
}

/// Resolves a key with a quantity and replacement values using the global
/// translator.
pub fn translate_count_with(key: &str, count: i64, replacements: &Replacements) -> String {
    with_translator(|translator| translator.t_count_with(key, count, replacements))
}
