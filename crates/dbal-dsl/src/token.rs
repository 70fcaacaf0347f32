use logos::Logos;
use serde::Serialize;

use crate::error::Span;

/// Reserved words. Matching is case-sensitive: `Note` is a keyword, `note`
/// is an identifier.
pub const KEYWORDS: [&str; 11] = [
    "Table", "Note", "ref", "not", "null", "unique", "default", "bool", "string", "int", "float",
];

/// Structural characters, each lexed as a one-character symbol.
pub const SYMBOLS: [char; 8] = ['{', '}', '[', ']', ':', ',', '<', '>'];

/// Token classes produced by the DBAL lexer.
///
/// `Comment` and `Error` belong to the vocabulary but no lexer rule
/// produces them: the notation has no comment syntax, and unmatched input
/// is reported as a [`DslError`](crate::DslError) instead.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[token("Table")]
    #[token("Note")]
    #[token("ref")]
    #[token("not")]
    #[token("null")]
    #[token("unique")]
    #[token("default")]
    #[token("bool")]
    #[token("string")]
    #[token("int")]
    #[token("float")]
    Keyword,

    /// Letters, digits and `.`, starting with a letter. Keywords win over
    /// this rule only when the whole run matches one.
    #[regex(r"[a-zA-Z][a-zA-Z0-9.]*")]
    Identifier,

    /// Single- or double-quoted text without escapes. A missing closing
    /// quote lets the literal run to the end of input.
    #[regex(r#""[^"]*"?"#)]
    #[regex(r"'[^']*'?")]
    StringLiteral,

    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    #[token(":")]
    #[token(",")]
    #[token("<")]
    #[token(">")]
    Symbol,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"\s+")]
    Whitespace,

    Comment,

    Error,
}

impl TokenKind {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::StringLiteral => "string literal",
            Self::Symbol => "symbol",
            Self::Number => "number",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A classified piece of source text.
///
/// `text` is the matched substring, except for string literals where the
/// surrounding quotes are dropped. `span` always covers the full match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// True if this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.is(TokenKind::Symbol, symbol)
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.is(TokenKind::Keyword, keyword)
    }

    /// Kind and text, as shown in diagnostics: `symbol '}'`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Whitespace => self.kind.description().to_string(),
            _ => format!("{} '{}'", self.kind.description(), self.text),
        }
    }
}

/// Returns true if `word` is a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}
