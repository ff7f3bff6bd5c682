//! Mython Runtime - the object model behind the interpreter.
//!
//! This crate provides everything the executor needs to compute with
//! values, without interpreting any AST itself:
//! - `ObjectHandle`: nullable handle to a value, owning or aliasing
//! - `Object`: the closed set of value kinds
//! - `Class` / `Method`: classes with single-inheritance method lookup
//! - `ClassInstance`: fields plus dispatch into method bodies
//! - `is_true` and the six comparison functions
//! - `Context`: the output capability passed through every call
//!
//! Method bodies are opaque [`Executable`]s supplied by the executor.

mod class;
mod compare;
mod context;
mod errors;
mod instance;
mod object;
mod stack;

#[cfg(test)]
mod test_helpers;

pub use class::{Class, Executable, Method};
pub use compare::{
    equal, greater, greater_or_equal, is_true, less, less_or_equal, not_equal, EQ_METHOD,
    LT_METHOD,
};
pub use context::{Context, OutputSink, SimpleContext};
pub use errors::{Relation, RuntimeError, RuntimeResult};
pub use instance::{ClassInstance, SELF, STR_METHOD};
pub use object::{Closure, Object, ObjectHandle};
