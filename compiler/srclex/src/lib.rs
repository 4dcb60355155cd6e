//! Configuration-driven lexical scanner.
//!
//! Give it a [`LexerConfig`] describing a language's keywords, symbols,
//! string delimiters, and comment markers, and it turns source text into
//! classified tokens, each with the line and column where it starts.
//!
//! # Architecture
//!
//! ```text
//! source → Scanner (srclex_core::Cursor) → Vec<Lexeme> → classify → Token
//! ```
//!
//! - [`Scanner`] runs the single left-to-right pass and produces raw
//!   lexemes. Whitespace and comments are dropped; strings and symbols are
//!   cut out whole; everything else accumulates into runs.
//! - [`Lexer`] owns the lexemes from the last scan and classifies them one
//!   at a time as [`Lexer::pop_token`] is called.
//!
//! Malformed input never aborts a scan. Unterminated strings and block
//! comments run to end of input and are reported as [`ScanIssue`]s.

mod classify;
mod config;
mod issue;
mod lexer;
mod scanner;
mod token;

pub use classify::classify;
pub use config::{DelimiterPair, LexerConfig};
pub use issue::ScanIssue;
pub use lexer::Lexer;
pub use scanner::{ScanOutput, Scanner};
pub use token::{Token, TokenKind};

pub use srclex_core::{Cursor, Lexeme, Position};
