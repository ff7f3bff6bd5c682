//! Lexer error types.
//!
//! Lexical errors are fatal: the lexer has no resynchronization rule, so the
//! first error aborts the token stream and is handed to the caller (parser
//! or driver) to report.

use mython_ir::{Token, TokenTag};
use std::fmt;
use thiserror::Error;

/// Result of a lexer operation.
pub type LexResult<T> = Result<T, LexError>;

/// A fatal lexer error.
#[derive(Debug, Error)]
pub enum LexError {
    /// End of line reached before the closing quote.
    #[error("line {line}, column {column}: unterminated string literal")]
    UnterminatedString { line: usize, column: usize },

    /// Digit run that does not fit the language's 32-bit integers.
    #[error("line {line}: integer literal `{literal}` does not fit in 32 bits")]
    IntOverflow { literal: String, line: usize },

    /// The current token is not what the parser asked for.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: Token },

    /// The line source failed.
    #[error("failed to read source line")]
    Io(#[from] std::io::Error),
}

impl LexError {
    /// Source line the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LexError::UnterminatedString { line, .. } | LexError::IntOverflow { line, .. } => {
                Some(*line)
            }
            LexError::UnexpectedToken { .. } | LexError::Io(_) => None,
        }
    }

    pub(crate) fn unexpected(expected: Expected, found: &Token) -> Self {
        LexError::UnexpectedToken {
            expected,
            found: found.clone(),
        }
    }
}

/// What an expectation helper was looking for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// Any token of this kind.
    Kind(TokenTag),
    /// Exactly this token.
    Exact(Token),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(tag) => write!(f, "{tag}"),
            Expected::Exact(token) => write!(f, "{token}"),
        }
    }
}
