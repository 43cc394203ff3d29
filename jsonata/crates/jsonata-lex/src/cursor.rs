//! Character cursor for traversing a single line of JSONata source.
//!
//! This module provides the `Cursor` struct which holds the only state the
//! lexer carries: a forward-only byte offset into an immutable line. It
//! exposes the four stream primitives the scan rules are written against:
//! end-of-line detection, peek-ahead, consume (one char or an exact match),
//! and consume-while-predicate.

/// A forward-only cursor over one line of source text.
///
/// The cursor never moves backwards. A fresh cursor is created for every
/// line supplied by the host.
///
/// # Example
///
/// ```
/// use jsonata_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("$sum(x)");
///
/// assert_eq!(cursor.current_char(), '$');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 's');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Creates a cursor positioned at byte `offset` within `source`.
    ///
    /// Offsets past the end are clamped to the end. An offset that falls
    /// inside a multi-byte character is moved forward to the next
    /// character boundary, so the cursor never splits a scalar value.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonata_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::at("a and b", 2);
    /// assert_eq!(cursor.remaining(), "and b");
    ///
    /// let cursor = Cursor::at("abc", 99);
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn at(source: &'a str, offset: usize) -> Self {
        let mut position = offset.min(source.len());
        while !source.is_char_boundary(position) {
            position += 1;
        }
        Self { source, position }
    }

    /// Returns the current character, or `'\0'` at end of line.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// Returns `'\0'` when looking past the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonata_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("~>");
    /// assert_eq!(cursor.peek_char(0), '~');
    /// assert_eq!(cursor.peek_char(1), '>');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII, which is nearly every JSONata lexeme
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at end of line.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances past `count` characters, stopping at end of line.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonata_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("$$");
    /// assert!(cursor.match_char('$'));
    /// assert!(cursor.match_char('$'));
    /// assert!(!cursor.match_char('$'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the line continues with exactly that text.
    ///
    /// Either the whole string is consumed or nothing is.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonata_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(":=1");
    /// assert!(!cursor.match_str("::"));
    /// assert!(cursor.match_str(":="));
    /// assert_eq!(cursor.remaining(), "1");
    /// ```
    pub fn match_str(&mut self, expected: &str) -> bool {
        if self.remaining().starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns how many
    /// characters were consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonata_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("name.first");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_alphabetic()), 4);
    /// assert_eq!(cursor.current_char(), '.');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.remaining().chars().next() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
            count += 1;
        }
        count
    }

    /// Consumes characters up to and including `delimiter`.
    ///
    /// Returns `true` if the delimiter was found; otherwise the rest of
    /// the line has been consumed and `false` is returned.
    pub fn eat_through(&mut self, delimiter: char) -> bool {
        match self.remaining().find(delimiter) {
            Some(index) => {
                self.position += index + delimiter.len_utf8();
                true
            },
            None => {
                self.position = self.source.len();
                false
            },
        }
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed rest of the line.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full line.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
