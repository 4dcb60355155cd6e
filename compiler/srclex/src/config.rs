//! Lexical grammar description.
//!
//! A [`LexerConfig`] names the surface of a language: its reserved
//! keywords, its operator/punctuation symbols, and its string and comment
//! markers. Every part is optional. Inputs are normalized on the way in:
//! empty entries are dropped and duplicates collapse onto their first
//! occurrence, so the accessors report the effective configuration.

use rustc_hash::FxHashSet;

/// An open/close marker pair, e.g. `("/*", "*/")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
    pub open: String,
    pub close: String,
}

impl DelimiterPair {
    /// Returns `None` if either marker is empty.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Option<Self> {
        let (open, close) = (open.into(), close.into());
        if open.is_empty() || close.is_empty() {
            return None;
        }
        Some(Self { open, close })
    }

    /// Returns `true` if `text` is a complete literal: it starts with `open`,
    /// ends with `close`, and is long enough to hold both.
    pub fn encloses(&self, text: &str) -> bool {
        text.len() >= self.open.len() + self.close.len()
            && text.starts_with(self.open.as_str())
            && text.ends_with(self.close.as_str())
    }
}

/// A deduplicated, order-preserving list with O(1) membership.
#[derive(Clone, Debug, Default)]
struct WordSet {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut set = Self::default();
        for word in words {
            let word = word.as_ref();
            if !word.is_empty() && set.index.insert(word.to_owned()) {
                set.words.push(word.to_owned());
            }
        }
        set
    }
}

impl WordSet {
    fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}

/// Declarative description of a language's lexical surface.
///
/// ```
/// use srclex::LexerConfig;
///
/// let config = LexerConfig::new()
///     .with_keywords(["struct", "enum", "struct"])
///     .with_symbols(["{", "}", "=", "=="])
///     .with_string_delimiters("\"", "\"")
///     .with_line_comment("//")
///     .with_block_comment("/*", "*/");
///
/// assert_eq!(config.keywords(), ["struct", "enum"]);
/// assert!(config.is_symbol("=="));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LexerConfig {
    keywords: WordSet,
    symbols: WordSet,
    string_delimiters: Option<DelimiterPair>,
    line_comment: Option<String>,
    block_comment: Option<DelimiterPair>,
}

impl LexerConfig {
    /// An empty configuration: no keywords, symbols, strings, or comments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved keywords, replacing any previous set.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords.into_iter().collect();
        self
    }

    /// Set the symbols, replacing any previous set.
    ///
    /// Order only matters as a tie-break between equal-length matches.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.symbols = symbols.into_iter().collect();
        self
    }

    /// Set the string-literal delimiters. Empty markers disable strings.
    #[must_use]
    pub fn with_string_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.string_delimiters = DelimiterPair::new(open, close);
        self
    }

    /// Set the line-comment marker. An empty marker disables line comments.
    #[must_use]
    pub fn with_line_comment(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        self.line_comment = (!marker.is_empty()).then_some(marker);
        self
    }

    /// Set the block-comment delimiters. Empty markers disable block comments.
    #[must_use]
    pub fn with_block_comment(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.block_comment = DelimiterPair::new(open, close);
        self
    }

    /// Effective keywords, in first-occurrence order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords.words
    }

    /// Effective symbols, in first-occurrence order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols.words
    }

    pub fn string_delimiters(&self) -> Option<&DelimiterPair> {
        self.string_delimiters.as_ref()
    }

    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }

    pub fn block_comment(&self) -> Option<&DelimiterPair> {
        self.block_comment.as_ref()
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    pub fn is_symbol(&self, text: &str) -> bool {
        self.symbols.contains(text)
    }
}
