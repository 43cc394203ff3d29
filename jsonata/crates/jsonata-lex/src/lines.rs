//! Line-by-line driver for multi-line documents.
//!
//! The lexer works on one line at a time and carries nothing across line
//! breaks. Hosts holding a whole document use [`tokenize_lines`] to split it
//! and lex every line, then [`LineTokens::segments`] to walk each line as a
//! gapless sequence of styled and unstyled pieces.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// The tokens of one line of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTokens<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Line text without its terminator.
    pub line: &'a str,
    /// Tokens in source order.
    pub tokens: Vec<Token>,
}

impl<'a> LineTokens<'a> {
    /// Lexes `line` as line number `index`.
    pub fn new(index: usize, line: &'a str) -> Self {
        Self {
            index,
            line,
            tokens: Lexer::new(line).collect(),
        }
    }

    /// Iterates the tokens paired with their text.
    pub fn lexemes(&self) -> impl Iterator<Item = (Token, &'a str)> + '_ {
        self.tokens.iter().map(|token| (*token, token.text(self.line)))
    }

    /// Walks the whole line in order. Tokens are yielded with their kind,
    /// the whitespace between them with `None`. Concatenating the pieces
    /// reproduces the line exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonata_lex::{LineTokens, TokenKind};
    ///
    /// let line = LineTokens::new(0, "a and b");
    /// let pieces: Vec<_> = line.segments().collect();
    /// assert_eq!(pieces[1], (None, " "));
    /// assert_eq!(pieces[2], (Some(TokenKind::Operator), "and"));
    /// ```
    pub fn segments(&self) -> Segments<'_, 'a> {
        Segments {
            line: self.line,
            tokens: &self.tokens,
            position: 0,
            next: 0,
        }
    }

    /// Returns true if any token on the line is error-qualified.
    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(|token| token.kind.is_error())
    }
}

/// Iterator returned by [`LineTokens::segments`].
pub struct Segments<'t, 'a> {
    line: &'a str,
    tokens: &'t [Token],
    position: usize,
    next: usize,
}

impl<'t, 'a> Iterator for Segments<'t, 'a> {
    type Item = (Option<TokenKind>, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position;
        match self.tokens.get(self.next) {
            Some(token) if token.span.start > start => {
                self.position = token.span.start;
                Some((None, &self.line[start..token.span.start]))
            },
            Some(token) => {
                self.next += 1;
                self.position = token.span.end;
                Some((Some(token.kind), token.text(self.line)))
            },
            None if start < self.line.len() => {
                self.position = self.line.len();
                Some((None, &self.line[start..]))
            },
            None => None,
        }
    }
}

/// Splits `text` into lines (on `\n`, dropping a trailing `\r`) and lexes
/// each one independently.
///
/// # Example
///
/// ```
/// use jsonata_lex::{tokenize_lines, TokenKind};
///
/// let lines = tokenize_lines("$x := 1;\r\n$x + 'open");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].line, "$x := 1;");
/// assert!(lines[1].has_errors());
/// ```
pub fn tokenize_lines(text: &str) -> Vec<LineTokens<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| LineTokens::new(index, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_independent() {
        // An unterminated string does not continue onto the next line
        let lines = tokenize_lines("\"abc\nfoo\"");
        assert_eq!(lines[0].tokens[0].kind, TokenKind::StringError);
        assert_eq!(lines[1].tokens[0].kind, TokenKind::Attribute);
        assert_eq!(lines[1].tokens[1].kind, TokenKind::StringError);
    }

    #[test]
    fn test_crlf_is_trimmed() {
        let lines = tokenize_lines("a\r\nb\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, "a");
        assert_eq!(lines[1].index, 1);
    }

    #[test]
    fn test_empty_lines_have_no_tokens() {
        let lines = tokenize_lines("a\n\n  \nb");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].tokens.is_empty());
        assert!(lines[2].tokens.is_empty());
    }

    #[test]
    fn test_segments_cover_line() {
        let line = LineTokens::new(0, "  $a := ( 1 )  ");
        let joined: String = line.segments().map(|(_, text)| text).collect();
        assert_eq!(joined, line.line);

        let styled: Vec<_> = line
            .segments()
            .filter_map(|(kind, text)| kind.map(|k| (k, text)))
            .collect();
        assert_eq!(styled, line.lexemes().map(|(t, s)| (t.kind, s)).collect::<Vec<_>>());
    }

    #[test]
    fn test_segments_of_empty_line() {
        assert_eq!(LineTokens::new(0, "").segments().count(), 0);
    }

    #[test]
    fn test_has_errors() {
        assert!(!LineTokens::new(0, "a.b").has_errors());
        assert!(LineTokens::new(0, "a.b ^ é").has_errors());
        assert!(LineTokens::new(0, "1e999").has_errors());
    }
}
