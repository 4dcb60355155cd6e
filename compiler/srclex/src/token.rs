//! Classified tokens.

use std::fmt;

use srclex_core::Lexeme;

/// What a lexeme turned out to be.
///
/// Keywords and symbols carry their own text, so a parser can match on
/// `TokenKind::Keyword(k) if k == "struct"` without a per-language enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A configured keyword.
    Keyword(String),
    /// A configured symbol.
    Symbol(String),
    /// Anything not otherwise recognized.
    Ident,
    /// Digits with at most one decimal point, e.g. `9` or `1.5`.
    Number,
    /// A complete string literal, delimiters included.
    Str,
}

impl TokenKind {
    /// The tag used when printing: the literal text for keywords and
    /// symbols, `IDENT`/`NUMBER`/`STRING` otherwise.
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::Keyword(text) | TokenKind::Symbol(text) => text.as_str(),
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
        }
    }

    /// Returns `true` for a keyword or symbol whose text is `literal`.
    pub fn is_literal(&self, literal: &str) -> bool {
        matches!(self, TokenKind::Keyword(text) | TokenKind::Symbol(text) if text == literal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexeme with its classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Lexeme,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.lexeme.text
    }

    pub fn line(&self) -> u32 {
        self.lexeme.line
    }

    pub fn column(&self) -> u32 {
        self.lexeme.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}
