//! jsonata-lex - Highlighting Lexer for JSONata
//!
//! This crate classifies the lexemes of JSONata query expressions into a
//! small set of categories for syntax highlighting. It is not a parser: it
//! builds no syntax tree and checks nothing beyond the well-formedness of
//! single tokens.
//!
//! # Overview
//!
//! Lexing happens one line at a time. The host hands the lexer a line and
//! pulls tokens until it gets `None`. Each token is a [`TokenKind`] and the
//! byte [`Span`] it covers; whitespace between tokens is skipped. Nothing
//! is carried from one line to the next.
//!
//! # Example Usage
//!
//! ```
//! use jsonata_lex::{Lexer, TokenKind};
//!
//! let line = r#"$sum(Order.Product[Price > 10].Price) & " total""#;
//! let mut lexer = Lexer::new(line);
//!
//! // Get tokens one at a time
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Builtin);
//! assert_eq!(first.text(line), "$sum");
//!
//! // Or iterate the rest
//! let styles: Vec<&str> = lexer.map(|t| t.kind.style()).collect();
//! assert_eq!(styles.last(), Some(&"string"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, spans, and the operator/keyword/built-in tables
//! - [`lexer`] - The scan rules and entry points
//! - [`cursor`] - Forward-only cursor over a line
//! - [`chars`] - Character classes
//! - [`lines`] - Multi-line document driver
//!
//! # Token Categories
//!
//! | Style | Lexemes |
//! |---|---|
//! | `operator` | `. [ ] { } ( ) , @ # ; : ? + - * / % \| = < > ^ & ! ~`, `.. := != >= <= ** ~>`, `and or in` |
//! | `keyword` | `true false null` |
//! | `string` | `"..."`, `'...'`, `` `...` `` |
//! | `number` | JSON numbers: `0`, `42`, `3.14`, `1e-6` |
//! | `variable` | `$name` |
//! | `builtin` | `$`, `$$`, `$sum`, `$string`, ... |
//! | `attribute` | bare field names |
//! | `error` | any other character |
//! | `string error` | string or quoted name missing its closing delimiter |
//! | `number error` | number that does not fit a finite `f64` |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod lines;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{number_prefix_len, scan, tokenize, Lexer};
pub use lines::{tokenize_lines, LineTokens, Segments};
pub use token::{
    is_builtin_function, is_keyword, is_operator_char, is_word_operator, Span, Token, TokenKind,
    BUILTIN_FUNCTIONS, KEYWORDS, MULTI_CHAR_OPERATORS, SINGLE_CHAR_OPERATORS, WORD_OPERATORS,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect (kind, text) pairs from a line.
    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind, t.text(source)))
            .collect()
    }

    fn styles(source: &str) -> Vec<&'static str> {
        tokenize(source).into_iter().map(|t| t.kind.style()).collect()
    }

    #[test]
    fn test_invoice_total() {
        let source = "$sum(Account.Order.Product.(Price * Quantity))";
        assert_eq!(
            styles(source),
            vec![
                "builtin", "operator", "attribute", "operator", "attribute", "operator",
                "attribute", "operator", "operator", "attribute", "operator", "attribute",
                "operator", "operator",
            ]
        );
    }

    #[test]
    fn test_variable_binding_block() {
        let source = "( $rate := 0.2; $net := Price * (1 - $rate); $round($net, 2) )";
        let tokens = lex_all(source);

        assert!(tokens.contains(&(TokenKind::Variable, "$rate")));
        assert!(tokens.contains(&(TokenKind::Variable, "$net")));
        assert!(tokens.contains(&(TokenKind::Builtin, "$round")));
        assert!(tokens.contains(&(TokenKind::Operator, ":=")));
        assert!(tokens.contains(&(TokenKind::Number, "0.2")));
        assert!(tokens.contains(&(TokenKind::Operator, ";")));
    }

    #[test]
    fn test_predicate_and_conditional() {
        let source = r#"Phone[type = "mobile" and number != null] ? true : false"#;
        assert_eq!(
            lex_all(source),
            vec![
                (TokenKind::Attribute, "Phone"),
                (TokenKind::Operator, "["),
                (TokenKind::Attribute, "type"),
                (TokenKind::Operator, "="),
                (TokenKind::String, r#""mobile""#),
                (TokenKind::Operator, "and"),
                (TokenKind::Attribute, "number"),
                (TokenKind::Operator, "!="),
                (TokenKind::Keyword, "null"),
                (TokenKind::Operator, "]"),
                (TokenKind::Operator, "?"),
                (TokenKind::Keyword, "true"),
                (TokenKind::Operator, ":"),
                (TokenKind::Keyword, "false"),
            ]
        );
    }

    #[test]
    fn test_lambda_and_chain() {
        let source = "$map(items, function($v) { $v.price }) ~> $join(', ')";
        let tokens = lex_all(source);

        assert_eq!(tokens[0], (TokenKind::Builtin, "$map"));
        assert!(tokens.contains(&(TokenKind::Attribute, "function")));
        assert!(tokens.contains(&(TokenKind::Variable, "$v")));
        assert!(tokens.contains(&(TokenKind::Operator, "~>")));
        assert!(tokens.contains(&(TokenKind::Builtin, "$join")));
        assert!(tokens.contains(&(TokenKind::String, "', '")));
    }

    #[test]
    fn test_object_constructor() {
        let source = r#"Account{ `Account Name`: $count(Order) }"#;
        assert_eq!(
            styles(source),
            vec![
                "attribute", "operator", "string", "operator", "builtin", "operator",
                "attribute", "operator", "operator",
            ]
        );
    }

    #[test]
    fn test_membership_and_range() {
        let source = "$x in [1..10]";
        assert_eq!(
            lex_all(source),
            vec![
                (TokenKind::Variable, "$x"),
                (TokenKind::Operator, "in"),
                (TokenKind::Operator, "["),
                (TokenKind::Number, "1"),
                (TokenKind::Operator, ".."),
                (TokenKind::Number, "10"),
                (TokenKind::Operator, "]"),
            ]
        );
    }

    #[test]
    fn test_negative_number_is_minus_then_number() {
        assert_eq!(
            lex_all("-5"),
            vec![(TokenKind::Operator, "-"), (TokenKind::Number, "5")]
        );
    }

    #[test]
    fn test_error_recovery_continues() {
        let source = r#"a ¬ b "unterminated"#;
        assert_eq!(
            lex_all(source),
            vec![
                (TokenKind::Attribute, "a"),
                (TokenKind::Error, "¬"),
                (TokenKind::Attribute, "b"),
                (TokenKind::StringError, r#""unterminated"#),
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize(" \t \t").is_empty());
    }
}
