//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the rule dispatch, and the
//! free-function entry points.

use crate::chars::{is_quote, is_whitespace, is_word_char};
use crate::cursor::Cursor;
use crate::token::{is_operator_char, Span, Token, TokenKind};

/// Lexer for one line of JSONata source.
///
/// Each call to [`Lexer::next_token`] skips whitespace, consumes exactly
/// one lexeme and classifies it. The only state is the forward cursor, so
/// the same span always lexes to the same category.
///
/// # Example
///
/// ```
/// use jsonata_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("$sum(price)");
/// assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Builtin));
/// assert_eq!(lexer.position(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor over the line.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self::at(line, 0)
    }

    /// Creates a lexer positioned at byte `offset` within `line`.
    ///
    /// See [`Cursor::at`] for how out-of-range offsets are handled.
    pub fn at(line: &'a str, offset: usize) -> Self {
        let cursor = Cursor::at(line, offset);
        Self {
            token_start: cursor.position(),
            cursor,
        }
    }

    /// Returns the next token, or `None` when the line is exhausted.
    ///
    /// Whitespace before the token is consumed without producing a token.
    /// A returned token always covers at least one character.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.cursor.eat_while(is_whitespace);
        if self.cursor.is_at_end() {
            return None;
        }

        self.token_start = self.cursor.position();
        let kind = self.scan_token();
        debug_assert!(self.cursor.position() > self.token_start);

        Some(Token::new(
            kind,
            Span::new(self.token_start, self.cursor.position()),
        ))
    }

    /// Dispatches on the current character. Rules are tried in priority
    /// order and the first match wins.
    fn scan_token(&mut self) -> TokenKind {
        if let Some(kind) = self.lex_multi_char_operator() {
            return kind;
        }

        match self.cursor.current_char() {
            c if is_operator_char(c) => self.lex_single_char_operator(),
            c if is_quote(c) => self.lex_string(c),
            c if c.is_ascii_digit() => self.lex_number(),
            '`' => self.lex_quoted_name(),
            '$' => self.lex_variable(),
            c if is_word_char(c) => self.lex_word(),
            _ => {
                self.cursor.advance();
                TokenKind::Error
            },
        }
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the most recent token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the text of the most recent token.
    pub fn token_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Returns the line being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Scans one token of `line` starting at byte `offset`.
///
/// This is the stateless form of the lexer: the host keeps the offset and
/// resumes from `token.span.end`. Returns `None` when nothing but
/// whitespace remains.
///
/// # Example
///
/// ```
/// use jsonata_lex::{scan, TokenKind};
///
/// let line = "a and b";
/// let token = scan(line, 1).unwrap();
/// assert_eq!(token.kind, TokenKind::Operator);
/// assert_eq!(token.text(line), "and");
/// assert!(scan(line, line.len()).is_none());
/// ```
pub fn scan(line: &str, offset: usize) -> Option<Token> {
    Lexer::at(line, offset).next_token()
}

/// Lexes a whole line.
pub fn tokenize(line: &str) -> Vec<Token> {
    Lexer::new(line).collect()
}
