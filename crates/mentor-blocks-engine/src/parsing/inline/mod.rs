//! # Inline Markup Tokenizer
//!
//! Cursor-based tokenizer for the emphasis markup mentors write inside prose.
//! This is the only place emphasis syntax is interpreted; renderers map the
//! resulting [`Span`]s to their own styling.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: `Emphasis` delimiter pairs and their precedence table
//! - **`cursor`**: `Cursor` for char-safe scanning with position tracking
//! - **`parser`**: `tokenize()` / `tokenize_text()` entry points
//!
//! ## Guarantees
//!
//! - Total: any `&str` tokenizes, unmatched delimiters are plain text
//! - Non-nested: matched content is emitted verbatim
//! - Single line: emphasis never spans a `\n`

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{tokenize, tokenize_text};
pub use types::{Span, SpanKind, plain_text};
