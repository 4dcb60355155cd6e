//! Non-fatal problems found during the scan pass.
//!
//! Scanning never fails. When a string literal or block comment is never
//! closed, the scanner consumes the rest of the input and records one of
//! these so the caller can decide whether to treat it as an error.

use srclex_core::Position;

#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanIssue {
    /// The closing string delimiter never occurs. The partial literal runs
    /// to end of input.
    #[error("unterminated string literal starting at {line}:{column}")]
    UnterminatedString { line: u32, column: u32 },
    /// The closing block-comment delimiter never occurs.
    #[error("unterminated block comment starting at {line}:{column}")]
    UnterminatedBlockComment { line: u32, column: u32 },
}

impl ScanIssue {
    pub(crate) fn unterminated_string(start: Position) -> Self {
        Self::UnterminatedString {
            line: start.line,
            column: start.column,
        }
    }

    pub(crate) fn unterminated_block_comment(start: Position) -> Self {
        Self::UnterminatedBlockComment {
            line: start.line,
            column: start.column,
        }
    }

    /// Line and column where the unterminated construct opened.
    pub fn location(&self) -> (u32, u32) {
        match *self {
            Self::UnterminatedString { line, column }
            | Self::UnterminatedBlockComment { line, column } => (line, column),
        }
    }
}
