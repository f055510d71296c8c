use std::collections::HashMap;
use std::fmt;

/// Replacement values keyed by placeholder name.
pub type Replacements = HashMap<String, Value>;

/// A replacement value substituted into a `{name}` placeholder.
///
/// # Example
///
/// ```
/// use parla::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Ada".into();
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(name.to_string(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
