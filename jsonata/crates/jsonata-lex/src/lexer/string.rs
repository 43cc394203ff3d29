//! String literal and quoted name lexing.
//!
//! Strings run from the opening quote to the next occurrence of the same
//! quote character. Escapes are not interpreted, so `\"` ends a
//! double-quoted string. A literal still open at end of line is an error
//! token covering the rest of the line.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"` or `'` delimited string literal.
    ///
    /// # Returns
    ///
    /// `TokenKind::String` if the closing quote is on this line,
    /// `TokenKind::StringError` otherwise.
    pub fn lex_string(&mut self, quote: char) -> TokenKind {
        self.lex_delimited(quote)
    }

    /// Lexes a backtick-quoted field name such as `` `Product Name` ``.
    pub fn lex_quoted_name(&mut self) -> TokenKind {
        self.lex_delimited('`')
    }

    fn lex_delimited(&mut self, delimiter: char) -> TokenKind {
        self.cursor.advance();
        if self.cursor.eat_through(delimiter) {
            TokenKind::String
        } else {
            TokenKind::StringError
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex(source: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(source)
            .map(|t| (t.kind, t.text(source)))
            .collect()
    }

    #[test]
    fn test_double_quoted() {
        assert_eq!(lex(r#""hello""#), vec![(TokenKind::String, r#""hello""#)]);
    }

    #[test]
    fn test_single_quoted() {
        assert_eq!(lex("'it'"), vec![(TokenKind::String, "'it'")]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(lex("''"), vec![(TokenKind::String, "''")]);
    }

    #[test]
    fn test_other_quote_does_not_close() {
        assert_eq!(lex(r#""it's""#), vec![(TokenKind::String, r#""it's""#)]);
        assert_eq!(lex(r#"'say "hi"'"#), vec![(TokenKind::String, r#"'say "hi"'"#)]);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(lex(r#""abc"#), vec![(TokenKind::StringError, r#""abc"#)]);
        assert_eq!(
            lex("x = 'abc def"),
            vec![
                (TokenKind::Attribute, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::StringError, "'abc def"),
            ]
        );
    }

    #[test]
    fn test_lone_quote() {
        assert_eq!(lex("\""), vec![(TokenKind::StringError, "\"")]);
    }

    #[test]
    fn test_backslash_is_not_an_escape() {
        assert_eq!(
            lex(r#""a\"b"#),
            vec![(TokenKind::String, r#""a\""#), (TokenKind::Attribute, "b")]
        );
    }

    #[test]
    fn test_string_with_unicode() {
        assert_eq!(lex("\"héllo €\""), vec![(TokenKind::String, "\"héllo €\"")]);
    }

    #[test]
    fn test_quoted_name() {
        assert_eq!(
            lex("`Product Name`.Price"),
            vec![
                (TokenKind::String, "`Product Name`"),
                (TokenKind::Operator, "."),
                (TokenKind::Attribute, "Price"),
            ]
        );
    }

    #[test]
    fn test_unterminated_quoted_name() {
        assert_eq!(lex("`abc"), vec![(TokenKind::StringError, "`abc")]);
    }
}
