use std::fmt;

/// A key selecting one template out of a plural map.
///
/// Exact counts and pluralizer categories share the plural map's key space:
/// `Count(1)` selects the key `"1"`, `Category("many")` selects `"many"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Exact count match.
    Count(u64),
    /// A category token returned by a pluralizer (e.g. "one", "few").
    Category(String),
}

impl Selector {
    /// The reserved fallback key of a plural map.
    pub const DEFAULT_KEY: &'static str = "n";

    /// Create a category selector.
    pub fn category(name: impl Into<String>) -> Self {
        Selector::Category(name.into())
    }

    /// The plural map key this selector looks up.
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Count(n) => write!(f, "{n}"),
            Selector::Category(name) => write!(f, "{name}"),
        }
    }
}

impl From<u64> for Selector {
    fn from(n: u64) -> Self {
        Selector::Count(n)
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::Category(s.to_string())
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Selector::Category(s)
    }
}
