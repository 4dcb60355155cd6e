//! The scan pass: source text in, raw lexemes out.
//!
//! # Design
//!
//! One left-to-right pass over the source. At each position the rules are
//! tried in a fixed priority order and the first that applies wins:
//!
//! 1. whitespace (one character at a time)
//! 2. line comment
//! 3. block comment
//! 4. string literal
//! 5. symbol (longest match)
//! 6. anything else extends the pending identifier/number run
//!
//! Each rule is a transition over a [`Cursor`] taken by value. It returns
//! the advanced cursor together with whatever it emitted: the pending run it
//! flushed, its own lexeme, or both. The pending run lives in the cursor's
//! mark, so no other state crosses from one position to the next.

use smallvec::SmallVec;
use srclex_core::{Cursor, Lexeme};

use crate::config::LexerConfig;
use crate::issue::ScanIssue;

/// Recognition rule that fired at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    Whitespace,
    LineComment,
    BlockComment,
    StringLiteral,
    Symbol,
    Run,
}

/// Outcome of applying one rule at one position.
struct Step<'a> {
    rule: Rule,
    cursor: Cursor<'a>,
    /// At most a flushed run followed by the rule's own lexeme.
    emitted: SmallVec<[Lexeme; 2]>,
    issue: Option<ScanIssue>,
}

impl<'a> Step<'a> {
    /// Begin a step by flushing the pending run, if any.
    fn flushing(rule: Rule, mut cursor: Cursor<'a>) -> Self {
        let mut emitted = SmallVec::new();
        emitted.extend(cursor.take_span());
        Self {
            rule,
            cursor,
            emitted,
            issue: None,
        }
    }

    /// Emit the span marked by this step.
    fn emit_span(&mut self) {
        self.emitted.extend(self.cursor.take_span());
    }
}

/// Lexemes and issues produced by one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Lexemes in source order.
    pub lexemes: Vec<Lexeme>,
    pub issues: Vec<ScanIssue>,
}

/// Drives a [`Cursor`] over the source according to a [`LexerConfig`].
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'c> {
    config: &'c LexerConfig,
}

impl<'c> Scanner<'c> {
    pub fn new(config: &'c LexerConfig) -> Self {
        Self { config }
    }

    /// Scan the whole source.
    pub fn scan(&self, source: &str) -> ScanOutput {
        let mut output = ScanOutput::default();
        let mut cursor = Cursor::new(source);

        while !cursor.at_end() {
            let step = self.step(cursor);
            tracing::trace!(rule = ?step.rule, at = %cursor.position(), "rule fired");
            cursor = step.cursor;
            output.lexemes.extend(step.emitted);
            output.issues.extend(step.issue);
        }
        output.lexemes.extend(cursor.take_span());

        tracing::debug!(
            lexemes = output.lexemes.len(),
            issues = output.issues.len(),
            "scan complete"
        );
        output
    }

    fn step<'a>(&self, cursor: Cursor<'a>) -> Step<'a> {
        Self::whitespace(cursor)
            .or_else(|| self.line_comment(cursor))
            .or_else(|| self.block_comment(cursor))
            .or_else(|| self.string_literal(cursor))
            .or_else(|| self.symbol(cursor))
            .unwrap_or_else(|| Self::run(cursor))
    }

    fn whitespace(cursor: Cursor<'_>) -> Option<Step<'_>> {
        if !cursor.is_whitespace_here() {
            return None;
        }
        let mut step = Step::flushing(Rule::Whitespace, cursor);
        step.cursor.advance();
        Some(step)
    }

    fn line_comment<'a>(&self, cursor: Cursor<'a>) -> Option<Step<'a>> {
        let marker = self.config.line_comment()?;
        if !cursor.starts_with(marker) {
            return None;
        }
        let mut step = Step::flushing(Rule::LineComment, cursor);
        step.cursor.skip_to_line_end();
        step.cursor.advance();
        Some(step)
    }

    fn block_comment<'a>(&self, cursor: Cursor<'a>) -> Option<Step<'a>> {
        let pair = self.config.block_comment()?;
        if !cursor.starts_with(&pair.open) {
            return None;
        }
        let start = cursor.position();
        let mut step = Step::flushing(Rule::BlockComment, cursor);
        // The close search starts on the open marker, so `/*/` is closed.
        if !step.cursor.skip_to(&pair.close) {
            tracing::debug!(at = %start, "unterminated block comment");
            step.issue = Some(ScanIssue::unterminated_block_comment(start));
        }
        Some(step)
    }

    fn string_literal<'a>(&self, cursor: Cursor<'a>) -> Option<Step<'a>> {
        let pair = self.config.string_delimiters()?;
        if !cursor.starts_with(&pair.open) {
            return None;
        }
        let start = cursor.position();
        let mut step = Step::flushing(Rule::StringLiteral, cursor);
        step.cursor.mark();
        step.cursor.advance_by(pair.open.chars().count());
        if !step.cursor.skip_to(&pair.close) {
            tracing::debug!(at = %start, "unterminated string literal");
            step.issue = Some(ScanIssue::unterminated_string(start));
        }
        step.emit_span();
        Some(step)
    }

    fn symbol<'a>(&self, cursor: Cursor<'a>) -> Option<Step<'a>> {
        let symbol = cursor.longest_match(self.config.symbols())?;
        let mut step = Step::flushing(Rule::Symbol, cursor);
        step.cursor.mark();
        step.cursor.advance_by(symbol.chars().count());
        step.emit_span();
        Some(step)
    }

    fn run(mut cursor: Cursor<'_>) -> Step<'_> {
        if !cursor.is_marked() {
            cursor.mark();
        }
        cursor.advance();
        Step {
            rule: Rule::Run,
            cursor,
            emitted: SmallVec::new(),
            issue: None,
        }
    }
}
