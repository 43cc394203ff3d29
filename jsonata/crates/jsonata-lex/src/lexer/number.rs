//! Number literal lexing.
//!
//! JSONata numbers follow the JSON grammar:
//! `-?(0|[1-9][0-9]*)(\.[0-9]+)?([Ee][-+]?[0-9]+)?`. The lexer takes the
//! longest prefix matching that grammar in one step, so `123.45e-6` is a
//! single token and `01` is `0` followed by `1`.

use crate::token::TokenKind;
use crate::Lexer;

/// Returns the byte length of the longest prefix of `text` that is a JSON
/// number, or `None` if `text` does not start with one.
///
/// A fraction or exponent is only included when it is complete: `1.` and
/// `1e+` both match just `1`.
///
/// # Example
///
/// ```
/// use jsonata_lex::number_prefix_len;
///
/// assert_eq!(number_prefix_len("123.45e-6"), Some(9));
/// assert_eq!(number_prefix_len("01"), Some(1));
/// assert_eq!(number_prefix_len("-7.x"), Some(2));
/// assert_eq!(number_prefix_len("x1"), None);
/// ```
pub fn number_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(bytes.first() == Some(&b'-'));

    match bytes.get(end) {
        Some(b'0') => end += 1,
        Some(b'1'..=b'9') => end += 1 + digits_from(end + 1),
        _ => return None,
    }

    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    Some(end)
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at an ASCII digit.
    ///
    /// # Returns
    ///
    /// `TokenKind::Number` when the literal parses to a finite `f64`,
    /// `TokenKind::NumberError` otherwise (for example `1e999`).
    pub fn lex_number(&mut self) -> TokenKind {
        let start = self.cursor.position();
        let len = number_prefix_len(self.cursor.remaining()).unwrap_or(1);
        // The grammar is ASCII, so bytes and chars coincide.
        self.cursor.advance_n(len);

        match self.cursor.slice_from(start).parse::<f64>() {
            Ok(value) if value.is_finite() => TokenKind::Number,
            _ => TokenKind::NumberError,
        }
    }
}
