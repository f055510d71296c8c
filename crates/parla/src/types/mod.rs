mod catalog;
mod options;
mod selector;
mod value;

pub use catalog::{Catalog, Entry, PluralMap};
pub use options::{Options, Pluralizer};
pub use selector::Selector;
pub use value::{Replacements, Value};
