//! Token definitions and lookup tables for JSONata.
//!
//! A token is a category plus the byte span it covers in its line. The
//! category labels returned by [`TokenKind::style`] are the stable contract
//! with highlighting hosts and must not change.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Two-character operators, in the order they are probed.
pub const MULTI_CHAR_OPERATORS: [&str; 7] = ["..", ":=", "!=", ">=", "<=", "**", "~>"];

/// Single-character operator symbols.
pub const SINGLE_CHAR_OPERATORS: [char; 26] = [
    '.', '[', ']', '{', '}', '(', ')', ',', '@', '#', ';', ':', '?', '+', '-', '*', '/', '%', '|',
    '=', '<', '>', '^', '&', '!', '~',
];

/// Operators spelled as words.
pub const WORD_OPERATORS: [&str; 3] = ["and", "or", "in"];

/// Reserved literal keywords.
pub const KEYWORDS: [&str; 3] = ["true", "false", "null"];

/// Names of the functions in the JSONata standard library.
pub const BUILTIN_FUNCTIONS: &[&str] = &[
    // String
    "string",
    "length",
    "substring",
    "substringBefore",
    "substringAfter",
    "uppercase",
    "lowercase",
    "trim",
    "pad",
    "contains",
    "split",
    "join",
    "match",
    "replace",
    "eval",
    "base64encode",
    "base64decode",
    "encodeUrl",
    "encodeUrlComponent",
    "decodeUrl",
    "decodeUrlComponent",
    // Numeric
    "number",
    "abs",
    "floor",
    "ceil",
    "round",
    "power",
    "sqrt",
    "random",
    "formatNumber",
    "formatBase",
    "formatInteger",
    "parseInteger",
    // Aggregation
    "sum",
    "max",
    "min",
    "average",
    // Boolean
    "boolean",
    "not",
    "exists",
    // Array
    "count",
    "append",
    "sort",
    "reverse",
    "shuffle",
    "distinct",
    "zip",
    "partition",
    // Object
    "keys",
    "lookup",
    "spread",
    "merge",
    "sift",
    "each",
    "error",
    "assert",
    "type",
    // Date/time
    "now",
    "millis",
    "fromMillis",
    "toMillis",
    // Higher-order
    "map",
    "filter",
    "single",
    "reduce",
];

static WORD_OPERATOR_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| WORD_OPERATORS.iter().copied().collect());

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static BUILTIN_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| BUILTIN_FUNCTIONS.iter().copied().collect());

/// Returns true if `c` is a single-character operator.
#[inline]
pub fn is_operator_char(c: char) -> bool {
    SINGLE_CHAR_OPERATORS.contains(&c)
}

/// Returns true if `word` is one of `and`, `or`, `in`.
pub fn is_word_operator(word: &str) -> bool {
    WORD_OPERATOR_SET.contains(word)
}

/// Returns true if `word` is `true`, `false` or `null`.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Returns true if `name` (without the `$` sigil) is a built-in function.
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_SET.contains(name)
}

/// Category of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Punctuation and word operators.
    Operator,
    /// `true`, `false`, `null`.
    Keyword,
    /// Quoted string or backtick-quoted name.
    String,
    /// String or quoted name missing its closing delimiter.
    StringError,
    /// Numeric literal.
    Number,
    /// Numeric literal that does not parse to a finite value.
    NumberError,
    /// `$name` that is not a built-in function.
    Variable,
    /// `$`, `$$`, or `$name` naming a built-in function.
    Builtin,
    /// Bare field name.
    Attribute,
    /// Unrecognized character.
    Error,
}

impl TokenKind {
    /// All categories, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Operator,
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::StringError,
        TokenKind::Number,
        TokenKind::NumberError,
        TokenKind::Variable,
        TokenKind::Builtin,
        TokenKind::Attribute,
        TokenKind::Error,
    ];

    /// Returns the style label a highlighting host uses for this category.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonata_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Builtin.style(), "builtin");
    /// assert_eq!(TokenKind::StringError.style(), "string error");
    /// ```
    pub const fn style(self) -> &'static str {
        match self {
            TokenKind::Operator => "operator",
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::StringError => "string error",
            TokenKind::Number => "number",
            TokenKind::NumberError => "number error",
            TokenKind::Variable => "variable",
            TokenKind::Builtin => "builtin",
            TokenKind::Attribute => "attribute",
            TokenKind::Error => "error",
        }
    }

    /// Parses a style label back into a category.
    pub fn from_style(style: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.style() == style)
    }

    /// Returns true for the error-qualified categories.
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::StringError | TokenKind::NumberError | TokenKind::Error
        )
    }

    /// Returns the category with its error qualifier removed.
    ///
    /// Used by hosts that colour a malformed literal like a well-formed
    /// one and add the error decoration on top.
    pub const fn base(self) -> Self {
        match self {
            TokenKind::StringError => TokenKind::String,
            TokenKind::NumberError => TokenKind::Number,
            other => other,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style())
    }
}

/// Byte range of a lexeme within its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// First byte of the lexeme.
    pub start: usize,
    /// One past the last byte of the lexeme.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers nothing. Emitted tokens never are.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the covered text of `line`.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// A classified lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Category of the lexeme.
    pub kind: TokenKind,
    /// Where the lexeme sits in its line.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the lexeme text within `line`.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        self.span.text(line)
    }
}
