use std::fmt;
use std::sync::Arc;

use bon::Builder;

use crate::types::{PluralMap, Selector};

/// A custom plural category function.
///
/// Called with the count's magnitude and the plural map being resolved;
/// returns the selector to look up in that map.
pub type Pluralizer = Arc<dyn Fn(u64, &PluralMap) -> Selector + Send + Sync>;

/// Resolution options for a [`Translator`](crate::Translator).
///
/// Options are replaced wholesale by `configure`; there is no merging.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use parla::{Options, PluralMap, Selector};
///
/// let options = Options::builder()
///     .debug(true)
///     .pluralize(Arc::new(|n: u64, _: &PluralMap| {
///         if n > 1 { Selector::category("many") } else { Selector::Count(n) }
///     }))
///     .build();
/// assert!(options.debug());
/// ```
#[derive(Clone, Default, Builder)]
pub struct Options {
    /// Emit diagnostics and mark missing translations visibly.
    #[builder(default)]
    debug: bool,

    /// Category resolver consulted when no exact-count variant exists.
    pluralize: Option<Pluralizer>,
}

impl Options {
    /// Options with debug mode enabled and no pluralizer.
    pub fn debug_mode() -> Self {
        Options::builder().debug(true).build()
    }

    /// Whether debug mode is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// The configured pluralizer, if any.
    pub fn pluralizer(&self) -> Option<&Pluralizer> {
        self.pluralize.as_ref()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("debug", &self.debug)
            .field("pluralize", &self.pluralize.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
