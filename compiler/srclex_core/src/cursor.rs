//! Position-tracking cursor over the source text.
//!
//! The cursor walks the source one character at a time, keeping the byte
//! offset, the 1-based line, and the 1-based column in step. Bulk skips
//! (to the end of a line, or past a target substring) use `memchr` to find
//! the stopping point and then fold the skipped text into line/column.
//!
//! # Marks
//!
//! A cursor also carries an optional *mark*: the position at which the
//! pending span started. [`Cursor::take_span`] cuts the text between the
//! mark and the current position into a [`Lexeme`] and clears the mark.
//!
//! The cursor is [`Copy`]. Scan rules take it by value and hand back the
//! advanced copy, so there is no shared mutable iterator.

use crate::lexeme::{Lexeme, Position};

/// Bytes treated as whitespace by the scanner.
///
/// Space, tab, line feed, carriage return, vertical tab, and form feed.
#[inline]
fn is_whitespace_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Saturating `usize` → `u32` for line/column arithmetic.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Cursor over a source string with line/column bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: Position,
    mark: Option<Position>,
}

impl<'a> Cursor<'a> {
    /// Create an unmarked cursor at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: Position::START,
            mark: None,
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Text from the current position to the end of the source.
    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos.offset..]
    }

    /// Character at the current position, `None` at end of text.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns `true` once the whole source has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    /// Returns `true` if the text at the current position begins with `s`.
    ///
    /// An empty `s` never matches, so an unconfigured marker can be tested
    /// without special-casing.
    #[inline]
    pub fn starts_with(&self, s: &str) -> bool {
        !s.is_empty() && self.rest().as_bytes().starts_with(s.as_bytes())
    }

    /// First candidate, in the order given, that matches here.
    pub fn starts_with_any<'c, S: AsRef<str>>(&self, candidates: &'c [S]) -> Option<&'c str> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .find(|candidate| self.starts_with(candidate))
    }

    /// Longest candidate that matches here.
    ///
    /// Among candidates of equal length the earliest one wins.
    pub fn longest_match<'c, S: AsRef<str>>(&self, candidates: &'c [S]) -> Option<&'c str> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|candidate| self.starts_with(candidate))
            .fold(None, |best: Option<&'c str>, candidate| match best {
                Some(b) if b.len() >= candidate.len() => Some(b),
                _ => Some(candidate),
            })
    }

    /// Returns `true` if the current character is ASCII whitespace.
    #[inline]
    pub fn is_whitespace_here(&self) -> bool {
        self.source
            .as_bytes()
            .get(self.pos.offset)
            .is_some_and(|&b| is_whitespace_byte(b))
    }

    /// Advance past one character.
    ///
    /// A newline moves to column 1 of the next line; anything else moves one
    /// column right. Does nothing at end of text.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(ch) = self.current() {
            self.pos.offset += ch.len_utf8();
            if ch == '\n' {
                self.pos.line += 1;
                self.pos.column = 1;
            } else {
                self.pos.column += 1;
            }
        }
    }

    /// Advance past `n` characters.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance to the next `\n` (not consuming it), or to end of text.
    pub fn skip_to_line_end(&mut self) {
        let rest = self.rest();
        let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        self.bump(&rest[..len]);
    }

    /// Advance past the first occurrence of `target` at or after the
    /// current position.
    ///
    /// Returns `false` if `target` does not occur; the cursor is then left at
    /// end of text.
    pub fn skip_to(&mut self, target: &str) -> bool {
        let rest = self.rest();
        match memchr::memmem::find(rest.as_bytes(), target.as_bytes()) {
            Some(found) => {
                self.bump(&rest[..found + target.len()]);
                true
            }
            None => {
                self.bump(rest);
                false
            }
        }
    }

    /// Fold a skipped slice of source into the position.
    ///
    /// `skipped` must start at the current offset.
    fn bump(&mut self, skipped: &str) {
        let bytes = skipped.as_bytes();
        self.pos.offset += bytes.len();
        if let Some(last_newline) = memchr::memrchr(b'\n', bytes) {
            let newlines = memchr::memchr_iter(b'\n', bytes).count();
            let tail = &skipped[last_newline + 1..];
            self.pos.line = self.pos.line.saturating_add(to_u32(newlines));
            self.pos.column = to_u32(tail.chars().count()).saturating_add(1);
        } else {
            self.pos.column = self
                .pos
                .column
                .saturating_add(to_u32(skipped.chars().count()));
        }
    }

    /// Record the current position as the start of the pending span.
    #[inline]
    pub fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    #[inline]
    pub fn is_marked(&self) -> bool {
        self.mark.is_some()
    }

    #[inline]
    pub fn clear_mark(&mut self) {
        self.mark = None;
    }

    /// Cut the pending span into a [`Lexeme`] and clear the mark.
    ///
    /// Returns `None` if nothing is marked.
    pub fn take_span(&mut self) -> Option<Lexeme> {
        let start = self.mark.take()?;
        Some(Lexeme::new(
            &self.source[start.offset..self.pos.offset],
            start,
        ))
    }
}
