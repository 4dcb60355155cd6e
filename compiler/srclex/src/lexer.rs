//! The lexer driver: `analyze` once, then `pop_token` until `None`.

use std::iter::FusedIterator;

use srclex_core::Lexeme;

use crate::classify::classify;
use crate::config::LexerConfig;
use crate::issue::ScanIssue;
use crate::scanner::Scanner;
use crate::token::Token;

/// Scans a source with a fixed configuration and hands out classified
/// tokens one at a time.
///
/// The lexemes are held in source order behind a read index; popping
/// classifies the next one and moves the index. Once the lexemes run out,
/// every further pop returns `None`.
///
/// ```
/// use srclex::{Lexer, LexerConfig, TokenKind};
///
/// let mut lexer = Lexer::new(LexerConfig::new().with_keywords(["let"]).with_symbols(["="]));
/// lexer.analyze("let x = 9");
///
/// let kinds: Vec<_> = lexer.map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Keyword("let".into()),
///         TokenKind::Ident,
///         TokenKind::Symbol("=".into()),
///         TokenKind::Number,
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    config: LexerConfig,
    source: String,
    lexemes: Vec<Lexeme>,
    next: usize,
    issues: Vec<ScanIssue>,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Effective (normalized) keywords.
    pub fn keywords(&self) -> &[String] {
        self.config.keywords()
    }

    /// Effective (normalized) symbols.
    pub fn symbols(&self) -> &[String] {
        self.config.symbols()
    }

    /// Scan `source`, replacing any previous lexemes, issues, and read
    /// position.
    #[tracing::instrument(level = "debug", skip_all, fields(len = tracing::field::Empty))]
    pub fn analyze(&mut self, source: impl Into<String>) -> &mut Self {
        self.source = source.into();
        tracing::Span::current().record("len", self.source.len());

        let output = Scanner::new(&self.config).scan(&self.source);
        self.lexemes = output.lexemes;
        self.issues = output.issues;
        self.next = 0;
        self
    }

    /// Classify and return the next lexeme, or `None` at end of stream.
    pub fn pop_token(&mut self) -> Option<Token> {
        let lexeme = self.lexemes.get(self.next)?.clone();
        self.next += 1;
        let kind = classify(&lexeme.text, &self.config);
        tracing::trace!(%kind, %lexeme, "token");
        Some(Token { kind, lexeme })
    }

    /// The source passed to the last [`analyze`](Self::analyze).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All lexemes from the last scan, including those already popped.
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// Number of tokens left to pop.
    pub fn remaining(&self) -> usize {
        self.lexemes.len() - self.next
    }

    /// Problems recorded by the last scan.
    pub fn issues(&self) -> &[ScanIssue] {
        &self.issues
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.pop_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lexer {}

impl FusedIterator for Lexer {}

#[cfg(test)]
mod tests;
