//! Compact discriminant tag for `Token`.

use std::fmt;

/// Payload-free discriminant of a [`Token`](super::Token).
///
/// The parser matches on tags when it only cares about the kind of the
/// current token (`expect(TokenTag::Id)`), and on whole tokens when the
/// payload matters (`expect_token(&Token::Char(':'))`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // === Valued (0-3) ===
    Number = 0,
    Id = 1,
    String = 2,
    Char = 3,

    // === Keywords (10-21) ===
    Class = 10,
    Return = 11,
    If = 12,
    Else = 13,
    Def = 14,
    Print = 15,
    And = 16,
    Or = 17,
    Not = 18,
    None = 19,
    True = 20,
    False = 21,

    // === Comparisons (30-33) ===
    Eq = 30,
    NotEq = 31,
    LessOrEq = 32,
    GreaterOrEq = 33,

    // === Structure (40-43) ===
    Newline = 40,
    Indent = 41,
    Dedent = 42,
    Eof = 43,
}

impl TokenTag {
    /// Variant name, as used in token rendering.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::Number => "Number",
            TokenTag::Id => "Id",
            TokenTag::String => "String",
            TokenTag::Char => "Char",
            TokenTag::Class => "Class",
            TokenTag::Return => "Return",
            TokenTag::If => "If",
            TokenTag::Else => "Else",
            TokenTag::Def => "Def",
            TokenTag::Print => "Print",
            TokenTag::And => "And",
            TokenTag::Or => "Or",
            TokenTag::Not => "Not",
            TokenTag::None => "None",
            TokenTag::True => "True",
            TokenTag::False => "False",
            TokenTag::Eq => "Eq",
            TokenTag::NotEq => "NotEq",
            TokenTag::LessOrEq => "LessOrEq",
            TokenTag::GreaterOrEq => "GreaterOrEq",
            TokenTag::Newline => "Newline",
            TokenTag::Indent => "Indent",
            TokenTag::Dedent => "Dedent",
            TokenTag::Eof => "Eof",
        }
    }

    /// Whether tokens of this kind carry a value.
    #[inline]
    pub const fn is_valued(self) -> bool {
        (self as u8) < 10
    }

    /// Whether this is one of the structural tokens synthesized from layout.
    #[inline]
    pub const fn is_structural(self) -> bool {
        (self as u8) >= 40
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
