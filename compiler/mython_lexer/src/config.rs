//! Lexer configuration.

/// Number of leading spaces that make up one indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Tunable lexer settings.
///
/// ```text
/// let lexer = Lexer::with_config(input, LexerConfig::default().indent_width(4))?;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    indent_width: usize,
}

impl LexerConfig {
    /// Set the number of spaces per indentation level.
    ///
    /// A width of zero is clamped to one so depth computation never divides
    /// by zero.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }

    /// Spaces per indentation level.
    #[inline]
    pub fn width(&self) -> usize {
        self.indent_width
    }

    /// Indentation depth of a line with `leading_spaces` spaces.
    ///
    /// Truncating: with the default width, 3 spaces is depth 1.
    #[inline]
    pub fn depth_of(&self, leading_spaces: usize) -> usize {
        leading_spaces / self.indent_width
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
