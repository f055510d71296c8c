//! Tokenized template types.

/// A tokenized translation template.
///
/// Templates without placeholders stay a single [`Template::Text`] so
/// assembly can return them without walking any parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// Raw text with no placeholders.
    Text(String),
    /// Alternating literal and placeholder segments.
    ///
    /// Always starts and ends with a [`Segment::Literal`] (possibly empty),
    /// and never holds two segments of the same kind next to each other.
    Parts(Vec<Segment>),
}

/// A segment of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text copied to the output.
    Literal(String),
    /// Placeholder name, without braces.
    Placeholder(String),
}

impl Template {
    /// Returns true if the template contains at least one placeholder.
    pub fn has_placeholders(&self) -> bool {
        matches!(self, Template::Parts(_))
    }

    /// Iterate over the placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        let segments: &[Segment] = match self {
            Template::Text(_) => &[],
            Template::Parts(parts) => parts,
        };
        segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}
