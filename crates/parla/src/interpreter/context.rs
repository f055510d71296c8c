//! Per-call resolution state.

use std::mem;

use crate::interpreter::Diagnostic;
use crate::types::{Replacements, Value};

/// State carried through a single resolution.
///
/// The context holds the caller's quantity and replacement values and
/// collects diagnostics. Diagnostics are only recorded in debug mode, and
/// each distinct diagnostic is recorded once.
pub struct ResolveContext<'a> {
    /// Translation key being resolved (for diagnostics).
    key: &'a str,
    /// Replacement values supplied by the caller.
    replacements: Option<&'a Replacements>,
    /// Quantity supplied by the caller, sign preserved.
    count: Option<i64>,
    /// Whether diagnostics are recorded.
    debug: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ResolveContext<'a> {
    /// Create a context for resolving `key`.
    pub fn new(
        key: &'a str,
        count: Option<i64>,
        replacements: Option<&'a Replacements>,
        debug: bool,
    ) -> Self {
        Self {
            key,
            replacements,
            count,
            debug,
            diagnostics: Vec::new(),
        }
    }

    /// The translation key being resolved.
    pub fn key(&self) -> &str {
        self.key
    }

    /// The caller's quantity, if one was supplied.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Whether debug mode is active for this resolution.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Look up a replacement value.
    pub fn get_replacement(&self, name: &str) -> Option<&Value> {
        self.replacements.and_then(|replacements| replacements.get(name))
    }

    /// Sorted names of the supplied replacement values.
    pub fn replacement_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .replacements
            .map(|replacements| replacements.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Record a diagnostic. No-op outside debug mode.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if self.debug && !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Get a reference to collected diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain all collected diagnostics from this context.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        mem::take(&mut self.diagnostics)
    }
}
