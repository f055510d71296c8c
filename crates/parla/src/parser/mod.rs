//! Template tokenizer.
//!
//! Splits raw translation templates into literal text and `{name}`
//! placeholders. The resulting [`Template`] is what the template cache stores
//! and what the assembler walks.

pub mod ast;
mod template;

pub use ast::*;
pub use template::tokenize;
