//! The translation facade.
//!
//! [`Translator`] owns the resolution options, the active catalog, and the
//! template cache. It is the user-facing API for resolving keys.

use bon::Builder;
use tracing::warn;

use crate::interpreter::{
    Diagnostic, ResolveContext, TemplateCache, assemble, compute_suggestions, resolve_plural,
};
use crate::types::{Catalog, Entry, Options, Replacements};

/// Delimiter wrapped around keys that fell back in debug mode.
const MISSING_MARKER: &str = "@@";

/// Resolves translation keys against an active catalog.
///
/// Resolution never fails. A key without a usable template resolves to the
/// key itself (wrapped as `@@key@@` in debug mode), and a placeholder without
/// a value stays in the output as `{name}`. In debug mode each fallback also
/// emits a [`Diagnostic`] through `tracing` at `WARN` level.
///
/// # Example
///
/// ```
/// use parla::{Catalog, Translator, replacements};
///
/// let mut translator = Translator::new();
/// translator.set_language(|| {
///     let mut catalog = Catalog::new();
///     catalog.insert("greet", "{n} greetings, {name}");
///     catalog.insert_plural("items", [("1", "one item"), ("n", "{n} items")]);
///     catalog
/// });
///
/// assert_eq!(translator.t_count("items", 1), "one item");
/// assert_eq!(translator.t_count("items", 5), "5 items");
/// assert_eq!(
///     translator.t_count_with("greet", 3, &replacements! { "name" => "Ada" }),
///     "3 greetings, Ada"
/// );
/// assert_eq!(translator.t("unknown.key"), "unknown.key");
/// ```
#[derive(Debug, Builder)]
pub struct Translator {
    /// Resolution options.
    #[builder(default)]
    options: Options,

    /// The active catalog.
    #[builder(default)]
    catalog: Catalog,

    /// Tokenized templates, shared across catalog reloads.
    #[builder(skip)]
    cache: TemplateCache,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator with default options and an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with default options and the given catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Translator::builder().catalog(catalog).build()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the resolution options. Nothing is merged.
    pub fn configure(&mut self, options: Options) {
        self.options = options;
    }

    /// Get the current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the active catalog with the one returned by `provider`.
    ///
    /// The provider is called once, immediately. The template cache is kept:
    /// it is keyed by template text, so entries stay valid across catalogs.
    pub fn set_language(&mut self, provider: impl FnOnce() -> Catalog) {
        self.catalog = provider();
    }

    /// Get the active catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of tokenized templates in the cache.
    pub fn template_cache_len(&self) -> usize {
        self.cache.len()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve a key with no quantity and no replacements.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key, None, None)
    }

    /// Resolve a key with a quantity.
    pub fn t_count(&self, key: &str, count: i64) -> String {
        self.resolve(key, Some(count), None)
    }

    /// Resolve a key with replacement values.
    pub fn t_with(&self, key: &str, replacements: &Replacements) -> String {
        self.resolve(key, None, Some(replacements))
    }

    /// Resolve a key with a quantity and replacement values.
    pub fn t_count_with(&self, key: &str, count: i64, replacements: &Replacements) -> String {
        self.resolve(key, Some(count), Some(replacements))
    }

    /// Resolve a key with an optional quantity and optional replacements.
    pub fn resolve(
        &self,
        key: &str,
        count: Option<i64>,
        replacements: Option<&Replacements>,
    ) -> String {
        self.resolve_with_diagnostics(key, count, replacements).0
    }

    /// Resolve a key, also returning the diagnostics produced in debug mode.
    ///
    /// Outside debug mode the diagnostic list is always empty.
    pub fn resolve_with_diagnostics(
        &self,
        key: &str,
        count: Option<i64>,
        replacements: Option<&Replacements>,
    ) -> (String, Vec<Diagnostic>) {
        let debug = self.options.debug();
        let mut ctx = ResolveContext::new(key, count, replacements, debug);

        let template = match (self.catalog.get(key), count) {
            (Some(Entry::Literal(template)), _) => Some(template.as_str()),
            (Some(Entry::Plural(map)), Some(count)) => {
                resolve_plural(map, count, &self.options, &mut ctx)
            }
            (Some(Entry::Plural(_)), None) | (Some(Entry::Unusable(_)), _) | (None, _) => None,
        };

        // Plain lookups skip tokenization entirely unless debug mode needs
        // placeholder diagnostics.
        let complex = count.is_some() || replacements.is_some();
        let text = match template {
            None => self.fallback(&mut ctx),
            Some(raw) if complex || debug => {
                let tokenized = self.cache.get_or_tokenize(raw);
                assemble(&tokenized, &mut ctx)
            }
            Some(raw) => raw.to_string(),
        };

        let diagnostics = ctx.take_diagnostics();
        for diagnostic in &diagnostics {
            warn!(target: "parla", key, "{diagnostic}");
        }
        (text, diagnostics)
    }

    /// Output for a key without a usable template.
    fn fallback(&self, ctx: &mut ResolveContext<'_>) -> String {
        let key = ctx.key().to_string();
        if !ctx.debug() {
            return key;
        }
        let suggestions = compute_suggestions(&key, self.catalog.keys());
        let marked = format!("{MISSING_MARKER}{key}{MISSING_MARKER}");
        ctx.add_diagnostic(Diagnostic::MissingTranslation { key, suggestions });
        marked
    }
}
