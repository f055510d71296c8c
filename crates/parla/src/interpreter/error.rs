//! Error and diagnostic types.

use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Json {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// A non-fatal problem found while resolving a translation.
///
/// Diagnostics are only collected in debug mode. Resolution itself never
/// fails: each diagnostic corresponds to a visible fallback in the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The key has no usable template in the active catalog.
    #[error("translation for '{key}' not found{}", format_suggestions(suggestions))]
    MissingTranslation {
        key: String,
        suggestions: Vec<String>,
    },

    /// No plural variant matched the count and there is no `n` fallback.
    #[error("no plural form found for {count} in '{key}', available: {}", available.join(", "))]
    MissingPluralForm {
        key: String,
        count: i64,
        available: Vec<String>,
    },

    /// A placeholder had no replacement value.
    #[error("no '{placeholder}' in replacements for '{key}', available: {}", available.join(", "))]
    MissingReplacement {
        key: String,
        placeholder: String,
        available: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions for a missing key.
///
/// Uses Levenshtein distance:
/// - Distance threshold of 1 for keys of 3 characters or fewer
/// - Distance threshold of 2 for longer keys
/// - At most 3 suggestions, closest first, ties broken alphabetically
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_unstable();
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.to_string())
        .collect()
}
