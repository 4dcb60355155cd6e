//! Lexeme classification.
//!
//! Purely a function of the lexeme text and the configuration. Checked in
//! order: number shape, string literal, keyword, symbol, and finally the
//! identifier fallback. Nothing here can fail.

use crate::config::LexerConfig;
use crate::token::TokenKind;

/// Classify one lexeme's text.
pub fn classify(text: &str, config: &LexerConfig) -> TokenKind {
    if is_number(text) {
        TokenKind::Number
    } else if config
        .string_delimiters()
        .is_some_and(|pair| pair.encloses(text))
    {
        TokenKind::Str
    } else if config.is_keyword(text) {
        TokenKind::Keyword(text.to_owned())
    } else if config.is_symbol(text) {
        TokenKind::Symbol(text.to_owned())
    } else {
        TokenKind::Ident
    }
}

/// One or more ASCII digits, then optionally a `.` and more digits.
///
/// `1.` counts; `.5`, `1.2.3`, and `1e5` do not.
fn is_number(text: &str) -> bool {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
