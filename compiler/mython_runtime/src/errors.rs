//! Runtime error types.
//!
//! None of these are recovered inside the runtime. They propagate to the
//! executor, which decides how to report them.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result of a runtime operation.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// A fatal runtime error.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No method with this name and arity along the class chain.
    #[error("class {class} has no method `{method}` taking {arity} argument(s)")]
    NoSuchMethod {
        class: String,
        method: String,
        arity: usize,
    },

    /// Operands have no user override and no common primitive kind.
    #[error("cannot compare {left} and {right} for {relation}")]
    CannotCompare {
        relation: Relation,
        left: &'static str,
        right: &'static str,
    },

    /// An empty handle, or an alias whose object is gone, was dereferenced.
    #[error("dereferenced an empty or dangling object handle")]
    InvalidHandle,

    /// Writing to the output sink failed.
    #[error("failed to write program output")]
    Output(#[from] io::Error),

    /// Failure raised by the executor while running a method body.
    #[error("{0}")]
    Custom(String),
}

impl RuntimeError {
    /// Create an executor-defined error.
    pub fn custom(message: impl Into<String>) -> Self {
        RuntimeError::Custom(message.into())
    }
}

/// Which comparison could not be performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `==` and everything derived from it.
    Equality,
    /// `<` and everything derived from it.
    Ordering,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Equality => f.write_str("equality"),
            Relation::Ordering => f.write_str("order"),
        }
    }
}
