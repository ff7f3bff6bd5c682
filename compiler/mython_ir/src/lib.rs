//! Mython IR - shared front-end types.
//!
//! This crate holds the token model that the lexer produces and the parser
//! consumes as its terminal alphabet:
//! - [`Token`]: the closed set of token variants, some carrying a value
//! - [`TokenTag`]: the payload-free discriminant of a token
//!
//! Tokens are immutable once constructed. Equality compares the variant and,
//! for valued variants, the carried value.

mod token;

pub use token::{Token, TokenTag};
