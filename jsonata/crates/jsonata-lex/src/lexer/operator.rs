//! Operator lexing.
//!
//! Two-character operators are probed before single characters, so `..`
//! is one range token while `==` (not a JSONata operator) is two `=`.

use crate::token::{TokenKind, MULTI_CHAR_OPERATORS};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes one of `..`, `:=`, `!=`, `>=`, `<=`, `**`, `~>`.
    ///
    /// Returns `None` without consuming anything if none match.
    pub fn lex_multi_char_operator(&mut self) -> Option<TokenKind> {
        MULTI_CHAR_OPERATORS
            .iter()
            .any(|op| self.cursor.match_str(op))
            .then_some(TokenKind::Operator)
    }

    /// Lexes a single-character operator. The caller has checked the
    /// current character is in the operator set.
    pub fn lex_single_char_operator(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::Operator
    }
}
