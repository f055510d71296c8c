//! Template tokenizer using winnow.
//!
//! A placeholder is a `{` followed by one or more word characters (ASCII
//! letters, digits, underscore) and a closing `}`. Everything else, including
//! unmatched braces, `{}`, and `{ name }`, is literal text.

use std::mem;

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{Segment, Template};

/// A raw piece produced by the scanner before literals are merged.
enum Piece<'i> {
    Literal(&'i str),
    Placeholder(&'i str),
}

/// Tokenize a raw template string.
///
/// Returns [`Template::Text`] holding the input unchanged when no placeholder
/// occurs. Otherwise returns [`Template::Parts`] alternating literal text and
/// placeholder names, beginning and ending with literal text. Adjacent
/// placeholders are separated by an empty literal.
///
/// # Example
///
/// ```
/// use parla::parser::{Segment, Template, tokenize};
///
/// assert_eq!(tokenize("Hello!"), Template::Text("Hello!".into()));
/// assert_eq!(
///     tokenize("{a}{b}"),
///     Template::Parts(vec![
///         Segment::Literal(String::new()),
///         Segment::Placeholder("a".into()),
///         Segment::Literal(String::new()),
///         Segment::Placeholder("b".into()),
///         Segment::Literal(String::new()),
///     ])
/// );
/// ```
pub fn tokenize(raw: &str) -> Template {
    let mut remaining = raw;
    let scanned: ModalResult<Vec<Piece<'_>>> = repeat(0.., piece).parse_next(&mut remaining);
    let pieces = match scanned {
        Ok(pieces) => pieces,
        // Every character is consumable as literal text, so the scanner
        // cannot fail on well-formed UTF-8 input.
        Err(_) => return Template::Text(raw.to_string()),
    };
    build_template(raw, pieces)
}

/// Merge scanned pieces into the alternating segment layout.
fn build_template(raw: &str, pieces: Vec<Piece<'_>>) -> Template {
    let mut segments = Vec::new();
    let mut text = String::new();

    for piece in pieces {
        match piece {
            Piece::Literal(s) => text.push_str(s),
            Piece::Placeholder(name) => {
                segments.push(Segment::Literal(mem::take(&mut text)));
                segments.push(Segment::Placeholder(name.to_string()));
            }
        }
    }

    if segments.is_empty() {
        return Template::Text(raw.to_string());
    }
    segments.push(Segment::Literal(text));
    Template::Parts(segments)
}

/// Parse a single piece (placeholder or literal run).
fn piece<'i>(input: &mut &'i str) -> ModalResult<Piece<'i>> {
    alt((
        placeholder.map(Piece::Placeholder),
        literal_run.map(Piece::Literal),
    ))
    .parse_next(input)
}

/// Parse a placeholder: `{word}`.
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('{', take_while(1.., is_word_char), '}').parse_next(input)
}

/// Parse literal text up to the next `{`, or a `{` that opens no placeholder.
fn literal_run<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((take_while(1.., |c: char| c != '{'), "{")).parse_next(input)
}

/// Check if a character may appear in a placeholder name.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
