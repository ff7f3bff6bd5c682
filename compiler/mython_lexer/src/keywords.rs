//! Keyword, reserved-character and comparison tables.
//!
//! A word is a maximal run of characters outside the reserved set. Words
//! are resolved against the keyword table; anything else is an identifier.
//! Reserved characters either start a two-character comparison or become a
//! `Char` token of their own.

use mython_ir::Token;

/// Look up a keyword by its exact text.
///
/// Keywords are case-sensitive: `None`, `True` and `False` are capitalized,
/// the rest are lowercase. Uses the word length as a first-pass filter
/// (keywords are 2-6 chars).
#[inline]
pub(crate) fn lookup(word: &str) -> Option<Token> {
    match word.len() {
        2 => match word {
            "if" => Some(Token::If),
            "or" => Some(Token::Or),
            _ => None,
        },
        3 => match word {
            "and" => Some(Token::And),
            "def" => Some(Token::Def),
            "not" => Some(Token::Not),
            _ => None,
        },
        4 => match word {
            "else" => Some(Token::Else),
            "None" => Some(Token::None),
            "True" => Some(Token::True),
            _ => None,
        },
        5 => match word {
            "class" => Some(Token::Class),
            "print" => Some(Token::Print),
            "False" => Some(Token::False),
            _ => None,
        },
        6 => match word {
            "return" => Some(Token::Return),
            _ => None,
        },
        _ => None,
    }
}

/// Characters that terminate a word.
///
/// Space and `#` are included so a word stops at whitespace or a trailing
/// comment.
#[inline]
pub(crate) fn is_reserved(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '(' | ')' | '+' | '-' | '*' | '/' | ':' | '<' | '>' | '=' | '!' | ' ' | '#'
    )
}

/// Resolve a two-character comparison operator at the start of `rest`.
#[inline]
pub(crate) fn comparison(rest: &str) -> Option<Token> {
    match rest.get(..2)? {
        "==" => Some(Token::Eq),
        "!=" => Some(Token::NotEq),
        "<=" => Some(Token::LessOrEq),
        ">=" => Some(Token::GreaterOrEq),
        _ => None,
    }
}
