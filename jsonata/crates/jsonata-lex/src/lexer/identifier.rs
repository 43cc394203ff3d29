//! Variable, built-in and bare-word lexing.
//!
//! `$`-prefixed names are variables unless they name a standard library
//! function. Bare words are word operators, keywords, or field names.

use crate::chars::{is_variable_char, is_word_char};
use crate::token::{is_builtin_function, is_keyword, is_word_operator, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `$`, `$$`, or `$name`.
    ///
    /// # Returns
    ///
    /// - `TokenKind::Builtin` for the context value `$`, the root `$$`,
    ///   and names in the built-in function table (`$sum`)
    /// - `TokenKind::Variable` for any other name (`$total`)
    pub fn lex_variable(&mut self) -> TokenKind {
        if self.cursor.match_str("$$") {
            return TokenKind::Builtin;
        }

        self.cursor.advance();
        let name_start = self.cursor.position();
        self.cursor.eat_while(is_variable_char);
        let name = self.cursor.slice_from(name_start);

        if name.is_empty() || is_builtin_function(name) {
            TokenKind::Builtin
        } else {
            TokenKind::Variable
        }
    }

    /// Lexes a run of ASCII letters.
    ///
    /// # Returns
    ///
    /// `TokenKind::Operator` for `and`/`or`/`in`, `TokenKind::Keyword` for
    /// `true`/`false`/`null`, `TokenKind::Attribute` for anything else.
    pub fn lex_word(&mut self) -> TokenKind {
        let start = self.cursor.position();
        self.cursor.eat_while(is_word_char);
        let word = self.cursor.slice_from(start);

        if is_word_operator(word) {
            TokenKind::Operator
        } else if is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Attribute
        }
    }
}
