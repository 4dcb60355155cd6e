//! Source positions and raw lexeme spans.

use std::fmt;

/// A location in the source text.
///
/// `line` and `column` are 1-based. Columns count characters, not bytes, and
/// reset to 1 on the character following a newline. `offset` is the byte
/// index into the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A raw, unclassified span of source text.
///
/// Produced by [`Cursor::take_span`](crate::Cursor::take_span). The
/// position is that of the span's first character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub text: String,
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Lexeme {
    /// Build a lexeme whose first character sits at `start`.
    pub fn new(text: impl Into<String>, start: Position) -> Self {
        Self {
            text: text.into(),
            offset: start.offset,
            line: start.line,
            column: start.column,
        }
    }

    /// Position of the first character.
    pub fn start(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Byte offset one past the last character.
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}:{}", self.text, self.line, self.column)
    }
}
