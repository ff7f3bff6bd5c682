//! Pull lexer with significant indentation.
//!
//! The lexer reads one physical line at a time and hands out one token per
//! [`Lexer::advance`] call. Indentation is tracked as a depth in units of
//! [`LexerConfig::width`] spaces; a change of depth between lines is owed as
//! a run of `Indent` or `Dedent` tokens that are emitted before the first
//! content token of the new line.
//!
//! # Token order
//!
//! ```text
//! class A:          Class Id{A} Char{:} Newline
//!   def f():        Indent Def Id{f} Char{(} Char{)} Char{:} Newline
//!     return 1      Indent Return Number{1} Newline
//! print A           Dedent Dedent Print Id{A} Newline
//!                   Eof Eof Eof ...
//! ```
//!
//! At end of input one `Dedent` is produced per open indentation level,
//! then `Eof` forever.

use std::cmp::Ordering;
use std::io::{BufRead, Lines};

use mython_ir::{Token, TokenTag};

use crate::config::LexerConfig;
use crate::escape;
use crate::keywords;
use crate::lex_error::{Expected, LexError, LexResult};

/// Indentation-aware pull lexer over a line source.
pub struct Lexer<R> {
    lines: Lines<R>,
    config: LexerConfig,
    /// Most recently produced token.
    current: Token,
    /// Current physical line with its indentation stripped. Empty once the
    /// line's closing `Newline` has been produced.
    line: String,
    /// Byte offset of the unscanned remainder of `line`.
    cursor: usize,
    /// 1-based number of the current physical line.
    line_no: usize,
    /// Number of leading spaces stripped from `line`.
    indent_len: usize,
    /// Indentation depth of the current line.
    depth: usize,
    /// Layout tokens owed before the next content token: positive counts
    /// `Dedent`s, negative counts `Indent`s.
    pending: isize,
    finished: bool,
}

impl<R: BufRead> Lexer<R> {
    /// Create a lexer with the default configuration and produce the first
    /// token.
    pub fn new(input: R) -> LexResult<Self> {
        Self::with_config(input, LexerConfig::default())
    }

    /// Create a lexer with an explicit configuration and produce the first
    /// token.
    pub fn with_config(input: R, config: LexerConfig) -> LexResult<Self> {
        let mut lexer = Lexer {
            lines: input.lines(),
            config,
            current: Token::Eof,
            line: String::new(),
            cursor: 0,
            line_no: 0,
            indent_len: 0,
            depth: 0,
            pending: 0,
            finished: false,
        };
        lexer.advance()?;
        Ok(lexer)
    }

    /// The most recently produced token.
    #[inline]
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// 1-based number of the physical line being tokenized.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// Produce the next token and make it current.
    pub fn advance(&mut self) -> LexResult<&Token> {
        let token = self.next_token()?;
        tracing::trace!(%token, line = self.line_no, "token");
        self.current = token;
        Ok(&self.current)
    }

    /// Check that the current token has the given kind.
    pub fn expect(&self, tag: TokenTag) -> LexResult<&Token> {
        if self.current.is(tag) {
            Ok(&self.current)
        } else {
            Err(LexError::unexpected(Expected::Kind(tag), &self.current))
        }
    }

    /// Check that the current token equals `token`, payload included.
    pub fn expect_token(&self, token: &Token) -> LexResult<()> {
        if &self.current == token {
            Ok(())
        } else {
            Err(LexError::unexpected(
                Expected::Exact(token.clone()),
                &self.current,
            ))
        }
    }

    /// Check that the current token is an identifier and return its text.
    pub fn expect_id(&self) -> LexResult<&str> {
        self.current
            .as_id()
            .ok_or_else(|| LexError::unexpected(Expected::Kind(TokenTag::Id), &self.current))
    }

    /// Advance, then check the new token's kind.
    pub fn expect_next(&mut self, tag: TokenTag) -> LexResult<&Token> {
        self.advance()?;
        self.expect(tag)
    }

    /// Advance, then check the new token exactly.
    pub fn expect_next_token(&mut self, token: &Token) -> LexResult<()> {
        self.advance()?;
        self.expect_token(token)
    }

    fn next_token(&mut self) -> LexResult<Token> {
        if self.finished {
            return Ok(self.finish_token());
        }
        if let Some(token) = self.take_pending() {
            return Ok(token);
        }

        self.skip_spaces();
        if self.rest().is_empty() {
            if !self.line.is_empty() {
                self.clear_line();
                return Ok(Token::Newline);
            }
            if !self.pull_line()? {
                self.finished = true;
                tracing::debug!(open_levels = self.depth, "source exhausted");
                return Ok(self.finish_token());
            }
            if let Some(token) = self.take_pending() {
                return Ok(token);
            }
        }

        self.scan_token()
    }

    /// One owed layout token, if any.
    fn take_pending(&mut self) -> Option<Token> {
        match self.pending.cmp(&0) {
            Ordering::Greater => {
                self.pending -= 1;
                Some(Token::Dedent)
            }
            Ordering::Less => {
                self.pending += 1;
                Some(Token::Indent)
            }
            Ordering::Equal => None,
        }
    }

    /// Token after end of input: close one open level, or `Eof`.
    fn finish_token(&mut self) -> Token {
        if self.depth > 0 {
            self.depth -= 1;
            Token::Dedent
        } else {
            Token::Eof
        }
    }

    /// Read the next line that has content, skipping blank lines and
    /// full-line comments. Returns `false` at end of input.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "indentation depths are bounded by line length"
    )]
    fn pull_line(&mut self) -> LexResult<bool> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_no += 1;

            let content = line.trim_start_matches(' ');
            if content.trim().is_empty() || content.starts_with('#') {
                continue;
            }

            let indent_len = line.len() - content.len();
            let depth = self.config.depth_of(indent_len);
            self.pending += self.depth as isize - depth as isize;
            self.depth = depth;
            self.indent_len = indent_len;
            self.line = content.to_string();
            self.cursor = 0;

            tracing::trace!(line = self.line_no, depth, "pulled line");
            return Ok(true);
        }
        Ok(false)
    }

    fn scan_token(&mut self) -> LexResult<Token> {
        let Some(first) = self.rest().chars().next() else {
            self.clear_line();
            return Ok(Token::Newline);
        };

        match first {
            '\'' | '"' => self.scan_string(),
            '0'..='9' => self.scan_number(),
            '#' => {
                self.clear_line();
                Ok(Token::Newline)
            }
            _ => Ok(self.scan_word(first)),
        }
    }

    fn scan_string(&mut self) -> LexResult<Token> {
        match escape::scan_string(self.rest()) {
            Some((value, consumed)) => {
                self.cursor += consumed;
                Ok(Token::String(value))
            }
            None => Err(LexError::UnterminatedString {
                line: self.line_no,
                column: self.column(),
            }),
        }
    }

    fn scan_number(&mut self) -> LexResult<Token> {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let digits = &rest[..len];
        let value = digits.parse::<i32>().map_err(|_| LexError::IntOverflow {
            literal: digits.to_string(),
            line: self.line_no,
        })?;
        self.cursor += len;
        Ok(Token::Number(value))
    }

    /// Keyword, identifier, comparison operator or single reserved char.
    fn scan_word(&mut self, first: char) -> Token {
        let rest = self.rest();
        let len = rest.find(keywords::is_reserved).unwrap_or(rest.len());
        let (token, consumed) = if len > 0 {
            let word = &rest[..len];
            (keywords::lookup(word).unwrap_or_else(|| Token::id(word)), len)
        } else if let Some(token) = keywords::comparison(rest) {
            (token, 2)
        } else {
            (Token::Char(first), first.len_utf8())
        };
        self.cursor += consumed;
        token
    }

    #[inline]
    fn rest(&self) -> &str {
        &self.line[self.cursor..]
    }

    fn skip_spaces(&mut self) {
        let rest = self.rest();
        let spaces = rest.len() - rest.trim_start_matches(' ').len();
        self.cursor += spaces;
    }

    fn clear_line(&mut self) {
        self.line.clear();
        self.cursor = 0;
    }

    /// 1-based column of the cursor in the physical line.
    fn column(&self) -> usize {
        self.indent_len + self.cursor + 1
    }
}
