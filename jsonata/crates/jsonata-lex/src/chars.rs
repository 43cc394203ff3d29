//! Character classes used by the scan rules.
//!
//! JSONata lexing is ASCII-driven: every class below is ASCII-only except
//! whitespace. Any other character that reaches the dispatcher is an
//! error token.

/// Checks if a character is skipped between tokens.
///
/// # Example
///
/// ```
/// use jsonata_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(!is_whitespace('.'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character may appear in a bare word (attribute, keyword,
/// word operator).
///
/// # Example
///
/// ```
/// use jsonata_lex::chars::is_word_char;
///
/// assert!(is_word_char('a'));
/// assert!(is_word_char('Z'));
/// assert!(!is_word_char('_'));
/// assert!(!is_word_char('1'));
/// assert!(!is_word_char('α'));
/// ```
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character may follow the `$` sigil in a variable name.
///
/// # Example
///
/// ```
/// use jsonata_lex::chars::is_variable_char;
///
/// assert!(is_variable_char('a'));
/// assert!(is_variable_char('9'));
/// assert!(is_variable_char('_'));
/// assert!(is_variable_char('-'));
/// assert!(!is_variable_char('.'));
/// assert!(!is_variable_char('$'));
/// ```
#[inline]
pub fn is_variable_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Checks if a character opens a quoted string literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_includes_tab_and_cr() {
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\r'));
        assert!(!is_whitespace('\0'));
    }

    #[test]
    fn test_word_chars_are_ascii_letters_only() {
        let accepted: String = (0u8..128)
            .map(char::from)
            .filter(|c| is_word_char(*c))
            .collect();
        assert_eq!(
            accepted,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
        );
    }

    #[test]
    fn test_variable_chars() {
        for c in "azAZ09_-".chars() {
            assert!(is_variable_char(c), "{c:?} should continue a variable");
        }
        for c in " .$`'\"é".chars() {
            assert!(!is_variable_char(c), "{c:?} should end a variable");
        }
    }

    #[test]
    fn test_quotes() {
        assert!(is_quote('"'));
        assert!(is_quote('\''));
        assert!(!is_quote('`'));
    }
}
