//! Token types for the Mython lexer.
//!
//! A token is either value-carrying (`Number`, `Id`, `String`, `Char`) or a
//! bare kind (keywords, comparison operators, structural tokens). The derived
//! equality is exactly the language's token equality: same variant, and for
//! valued variants, equal payload.

mod tag;

use std::fmt;

pub use tag::TokenTag;

/// A single lexical unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Integer literal: `42`
    Number(i32),
    /// Identifier: `x`, `__init__`
    Id(String),
    /// String literal with escapes already resolved.
    String(String),
    /// Any reserved single character: `.`, `,`, `(`, `)`, `+`, `-`, `:`, ...
    Char(char),

    // Keywords
    Class,
    Return,
    If,
    Else,
    Def,
    Print,
    And,
    Or,
    Not,
    None,
    True,
    False,

    // Two-character comparisons
    Eq,          // ==
    NotEq,       // !=
    LessOrEq,    // <=
    GreaterOrEq, // >=

    // Structure
    Newline,
    Indent,
    Dedent,
    Eof,
}

impl Token {
    /// Identifier token from anything string-like.
    #[inline]
    pub fn id(name: impl Into<String>) -> Self {
        Token::Id(name.into())
    }

    /// String literal token from anything string-like.
    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Token::String(value.into())
    }

    /// The payload-free discriminant of this token.
    pub fn tag(&self) -> TokenTag {
        match self {
            Token::Number(_) => TokenTag::Number,
            Token::Id(_) => TokenTag::Id,
            Token::String(_) => TokenTag::String,
            Token::Char(_) => TokenTag::Char,
            Token::Class => TokenTag::Class,
            Token::Return => TokenTag::Return,
            Token::If => TokenTag::If,
            Token::Else => TokenTag::Else,
            Token::Def => TokenTag::Def,
            Token::Print => TokenTag::Print,
            Token::And => TokenTag::And,
            Token::Or => TokenTag::Or,
            Token::Not => TokenTag::Not,
            Token::None => TokenTag::None,
            Token::True => TokenTag::True,
            Token::False => TokenTag::False,
            Token::Eq => TokenTag::Eq,
            Token::NotEq => TokenTag::NotEq,
            Token::LessOrEq => TokenTag::LessOrEq,
            Token::GreaterOrEq => TokenTag::GreaterOrEq,
            Token::Newline => TokenTag::Newline,
            Token::Indent => TokenTag::Indent,
            Token::Dedent => TokenTag::Dedent,
            Token::Eof => TokenTag::Eof,
        }
    }

    /// Whether this token is of the given kind, ignoring any payload.
    #[inline]
    pub fn is(&self, tag: TokenTag) -> bool {
        self.tag() == tag
    }

    /// Value of a `Number` token.
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of an `Id` token.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Token::Id(name) => Some(name),
            _ => None,
        }
    }

    /// Value of a `String` token.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Token::String(s) => Some(s),
            _ => None,
        }
    }

    /// Character of a `Char` token.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Token::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// Renders the variant name, with the payload in braces for valued tokens
/// (`Number{42}`, `Id{x}`, `Indent`).
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "Number{{{n}}}"),
            Token::Id(name) => write!(f, "Id{{{name}}}"),
            Token::String(s) => write!(f, "String{{{s}}}"),
            Token::Char(c) => write!(f, "Char{{{c}}}"),
            _ => f.write_str(self.tag().name()),
        }
    }
}
