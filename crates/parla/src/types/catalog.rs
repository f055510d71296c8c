use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::interpreter::LoadError;

/// Plural variants of one message, keyed by selector (`"1"`, `"many"`, `"n"`).
pub type PluralMap = BTreeMap<String, String>;

/// A single catalog entry: either a template or a map of plural variants.
///
/// JSON values of any other shape (numbers, arrays, nested module objects)
/// still load, as [`Entry::Unusable`]. Looking one up falls back to the key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "JsonValue")]
pub enum Entry {
    /// A literal template string.
    Literal(String),
    /// Plural variants selected by quantity.
    Plural(PluralMap),
    /// A value that is neither, with a description of what was found.
    Unusable(String),
}

impl Entry {
    /// Get this entry as a literal template, if it is one.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Entry::Literal(s) => Some(s),
            Entry::Plural(_) | Entry::Unusable(_) => None,
        }
    }

    /// Get this entry as a plural map, if it is one.
    pub fn as_plural(&self) -> Option<&PluralMap> {
        match self {
            Entry::Plural(map) => Some(map),
            Entry::Literal(_) | Entry::Unusable(_) => None,
        }
    }
}

impl From<JsonValue> for Entry {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(s) => Entry::Literal(s),
            JsonValue::Object(variants) => {
                let mut map = PluralMap::new();
                for (selector, template) in variants {
                    match template {
                        JsonValue::String(s) => {
                            map.insert(selector, s);
                        }
                        other => {
                            return Entry::Unusable(format!(
                                "plural variant '{selector}' is {}",
                                json_kind(&other)
                            ));
                        }
                    }
                }
                Entry::Plural(map)
            }
            other => Entry::Unusable(json_kind(&other).to_string()),
        }
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Literal(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Literal(s)
    }
}

impl From<PluralMap> for Entry {
    fn from(map: PluralMap) -> Self {
        Entry::Plural(map)
    }
}

/// The key-to-entry mapping for one language.
///
/// A catalog is read-only once handed to a translator; loading another
/// language replaces it wholesale.
///
/// # Example
///
/// ```
/// use parla::{Catalog, Entry};
///
/// let catalog = Catalog::from_json_str(r#"{
///     "hello": "Hello!",
///     "items": { "1": "one item", "n": "{n} items" }
/// }"#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("hello"), Some(&Entry::from("Hello!")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, Entry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        parse_json(content, Path::new("<inline>"))
    }

    /// Read and parse a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        parse_json(&content, path)
    }

    /// Look up an entry by translation key.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Returns true if the catalog has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a literal template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries
            .insert(key.into(), Entry::Literal(template.into()));
    }

    /// Insert plural variants.
    pub fn insert_plural<K, V>(
        &mut self,
        key: impl Into<String>,
        variants: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: Into<String>,
    {
        let map = variants
            .into_iter()
            .map(|(selector, template)| (selector.into(), template.into()))
            .collect();
        self.entries.insert(key.into(), Entry::Plural(map));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all translation keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<K: Into<String>> FromIterator<(K, Entry)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (K, Entry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Parse JSON content. Only syntax problems are errors; every
/// well-formed value becomes an [`Entry`].
fn parse_json(content: &str, path: &Path) -> Result<Catalog, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
