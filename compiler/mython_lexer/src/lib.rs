//! Mython Lexer - turns source lines into tokens.
//!
//! The lexer is pull-based: the parser calls [`Lexer::advance`] to step to
//! the next token and [`Lexer::current_token`] to look at it again.
//! Structural `Indent`/`Dedent` tokens are synthesized from leading-space
//! depth, Python style.
//!
//! # Lexical rules
//!
//! - Blank lines and lines whose first non-space character is `#` are
//!   skipped entirely; a `#` after code ends the line.
//! - Strings use `'` or `"` as delimiter and support `\n \t \r \" \\ \'`.
//! - Integers are decimal digit runs that fit in an `i32`.
//! - Words are runs of non-reserved characters, resolved as keywords or
//!   identifiers; reserved characters become `Char` tokens, except the
//!   comparisons `==`, `!=`, `<=`, `>=`.

mod config;
mod escape;
mod keywords;
mod lex_error;
mod lexer;

pub use config::{LexerConfig, DEFAULT_INDENT_WIDTH};
pub use lex_error::{Expected, LexError, LexResult};
pub use lexer::Lexer;
pub use mython_ir::{Token, TokenTag};

/// Tokenize a whole source text, up to and including the first `Eof`.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    tokenize_with_config(source, LexerConfig::default())
}

/// Tokenize a whole source text with an explicit configuration.
pub fn tokenize_with_config(source: &str, config: LexerConfig) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::with_config(source.as_bytes(), config)?;
    let mut tokens = vec![lexer.current_token().clone()];
    while !lexer.current_token().is(TokenTag::Eof) {
        tokens.push(lexer.advance()?.clone());
    }
    Ok(tokens)
}
