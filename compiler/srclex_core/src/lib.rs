//! Low-level cursor for the srclex scanner.
//!
//! This crate knows nothing about keywords, symbols, or token kinds. It
//! provides the position-tracking [`Cursor`] that the scan pass in `srclex`
//! drives over the source text, and the [`Lexeme`] spans it cuts out.
//!
//! ```text
//! source → Cursor (mark … advance … take_span) → Lexeme { text, line, column }
//! ```

mod cursor;
mod lexeme;

pub use cursor::Cursor;
pub use lexeme::{Lexeme, Position};
