//! Placeholder substitution.

use crate::interpreter::{Diagnostic, ResolveContext};
use crate::parser::{Segment, Template};
use crate::types::Selector;

/// Assemble the final string from a tokenized template.
///
/// Placeholders resolve in order:
/// 1. A replacement value with the same name
/// 2. The caller's quantity, for the reserved name `n`
/// 3. Otherwise the placeholder is left in the output as `{name}` and a
///    [`Diagnostic::MissingReplacement`] is recorded (debug mode only)
///
/// A placeholder that occurs several times is reported once per call, since
/// the context drops duplicate diagnostics.
pub fn assemble(template: &Template, ctx: &mut ResolveContext<'_>) -> String {
    let segments = match template {
        Template::Text(text) => return text.clone(),
        Template::Parts(segments) => segments,
    };

    let mut output = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => {
                let value = resolve_placeholder(name, ctx);
                output.push_str(&value);
            }
        }
    }
    output
}

fn resolve_placeholder(name: &str, ctx: &mut ResolveContext<'_>) -> String {
    if let Some(value) = ctx.get_replacement(name) {
        return value.to_string();
    }

    match ctx.count() {
        Some(count) if name == Selector::DEFAULT_KEY => count.to_string(),
        _ => {
            let diagnostic = Diagnostic::MissingReplacement {
                key: ctx.key().to_string(),
                placeholder: name.to_string(),
                available: ctx.replacement_names(),
            };
            ctx.add_diagnostic(diagnostic);
            format!("{{{name}}}")
        }
    }
}
