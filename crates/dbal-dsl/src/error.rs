use std::fmt;

use serde::Serialize;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of bytes covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-based line and column (in characters) of the span start.
    ///
    /// Offsets past the end of `source` resolve to the position just after
    /// the last character.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for (offset, c) in source.char_indices() {
            if offset >= self.start {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors raised while tokenizing or parsing DBAL source.
///
/// All of them are fatal: the first one aborts the run and no partial
/// result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// The lexer hit a character that starts no token.
    InvalidCharacter { character: char, span: Span },

    /// The parser found a token other than the one the grammar requires.
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    /// The parser ran out of tokens. `span` is the empty span at the end of
    /// the source.
    UnexpectedEndOfInput { expected: String, span: Span },
}

impl DslError {
    /// Source location of the error.
    pub fn span(&self) -> Span {
        match self {
            Self::InvalidCharacter { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEndOfInput { span, .. } => *span,
        }
    }

    /// True for errors raised by the lexer.
    pub fn is_lex_error(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. })
    }

    /// True for errors raised by the parser.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedToken { .. } | Self::UnexpectedEndOfInput { .. }
        )
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, span } => {
                write!(f, "invalid character {character:?} at {span}")
            }
            Self::UnexpectedToken {
                expected,
                found,
                span,
            } => {
                write!(
                    f,
                    "unexpected token at {span}: expected {expected}, found {found}"
                )
            }
            Self::UnexpectedEndOfInput { expected, .. } => {
                write!(
                    f,
                    "unexpected end of input: expected {expected}, found end of input"
                )
            }
        }
    }
}

impl std::error::Error for DslError {}
