use std::fmt;

use sqlgen_core::AstError;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What went wrong while lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated raw string")]
    UnterminatedRawString,

    /// Only `\"` and `\\` are valid inside a double-quoted name.
    #[error("invalid escape sequence")]
    InvalidEscape,

    #[error("invalid character")]
    InvalidCharacter,
}

/// A malformed token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid token at {position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub position: Position,
}

/// Details of a syntax error. Every variant displays as `syntax error`; the
/// detail is for callers and logs, not for the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    /// The parser encountered an unexpected token.
    #[error("syntax error")]
    UnexpectedToken { expected: String, found: String },

    /// The parser reached the end of input when more tokens were expected.
    #[error("syntax error")]
    UnexpectedEndOfInput { expected: String },

    /// The tokens formed a value the AST rejects, e.g. a repeated option key.
    #[error("syntax error")]
    InvalidValue(AstError),

    /// The lexer could not form a token.
    #[error("syntax error")]
    Lex(LexErrorKind),
}

/// The first error found while parsing a source unit.
///
/// Displays as `Error at <unit>:<line>:<col>: syntax error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error at {unit}:{position}: {kind}")]
pub struct SyntaxError {
    /// Name of the source unit, as given to `parse`.
    pub unit: String,
    pub position: Position,
    pub span: Span,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(
        unit: impl Into<String>,
        position: Position,
        span: Span,
        kind: SyntaxErrorKind,
    ) -> Self {
        Self {
            unit: unit.into(),
            position,
            span,
            kind,
        }
    }

    /// Surfaces a lexer failure as a syntax error at the same position.
    pub fn from_lex(unit: impl Into<String>, err: LexError) -> Self {
        Self::new(unit, err.position, err.span, SyntaxErrorKind::Lex(err.kind))
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}
