//! Resolution engine.
//!
//! Turns a translation key, an optional quantity, and optional replacement
//! values into a final string: plural variant selection, cached template
//! tokenization, and placeholder assembly.

mod assembler;
mod cache;
mod context;
mod error;
mod lint;
pub mod plural;
mod translator;

pub use assembler::assemble;
pub use cache::TemplateCache;
pub use context::ResolveContext;
pub use error::{Diagnostic, LoadError, compute_suggestions};
pub use lint::{LintWarning, lint_catalog};
pub use plural::{cldr_pluralizer, plural_category, resolve_plural};
pub use translator::Translator;
