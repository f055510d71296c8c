//! Memo table of tokenized templates.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::parser::{Template, tokenize};

/// Tokenized templates keyed by their raw text.
///
/// Entries are created on first use and never evicted. Keys are template
/// text, not translation keys, so identical templates under different keys
/// (or in different catalogs) share one entry.
///
/// Uses `RefCell` for interior mutability so resolution can stay `&self`.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: RefCell<HashMap<String, Arc<Template>>>,
}

impl TemplateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or tokenize and cache a raw template.
    pub fn get_or_tokenize(&self, raw: &str) -> Arc<Template> {
        {
            let templates = self.templates.borrow();
            if let Some(template) = templates.get(raw) {
                return Arc::clone(template);
            }
        }
        let template = Arc::new(tokenize(raw));
        self.templates
            .borrow_mut()
            .insert(raw.to_string(), Arc::clone(&template));
        template
    }

    /// Returns true if `raw` has already been tokenized.
    pub fn contains(&self, raw: &str) -> bool {
        self.templates.borrow().contains_key(raw)
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.templates.borrow().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.borrow().is_empty()
    }
}
