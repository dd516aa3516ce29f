use serde::{Deserialize, Serialize};

/// Kind of a lexical token.
///
/// The set is closed: lexer and parser agree on it through the symbolic
/// names returned by [`TokenKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Special
    #[serde(rename = "ILLEGAL")]
    Illegal,
    #[serde(rename = "EOF")]
    Eof,

    // Identifiers and literals
    #[serde(rename = "IDENT")]
    Ident,
    #[serde(rename = "INT")]
    Int,

    // Operators
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "!")]
    Bang,
    #[serde(rename = "*")]
    Asterisk,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,

    // Delimiters
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ";")]
    Semicolon,
    #[serde(rename = "(")]
    LParen,
    #[serde(rename = ")")]
    RParen,
    #[serde(rename = "{")]
    LBrace,
    #[serde(rename = "}")]
    RBrace,

    // Keywords
    #[serde(rename = "FUNCTION")]
    Function,
    #[serde(rename = "LET")]
    Let,
    #[serde(rename = "TRUE")]
    True,
    #[serde(rename = "FALSE")]
    False,
    #[serde(rename = "IF")]
    If,
    #[serde(rename = "ELSE")]
    Else,
    #[serde(rename = "RETURN")]
    Return,

    // Two-character comparisons
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
}

/// Reserved words and the kinds they classify as.
///
/// Matching is exact and case-sensitive.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 27] = [
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::Eq,
        TokenKind::NotEq,
    ];

    /// Stable symbolic name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
        }
    }

    /// Returns true if this kind is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns true for arithmetic, assignment and bang operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
        )
    }

    /// Returns true for `<`, `>`, `==` and `!=`.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Lt | TokenKind::Gt | TokenKind::Eq | TokenKind::NotEq
        )
    }

    /// Returns true for punctuation: commas, semicolons, parens and braces.
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an identifier-shaped literal.
///
/// Returns the keyword kind if `ident` is a reserved word, `Ident` otherwise.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|(_, kind)| *kind)
        .unwrap_or(TokenKind::Ident)
}

/// Source spelling of a keyword kind, if `kind` is one.
pub fn keyword_literal(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(word, _)| *word)
}

/// A classified lexical unit: its kind and the exact source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// Token for an identifier-shaped word, classified through the keyword table.
    pub fn ident(word: impl Into<String>) -> Self {
        let literal = word.into();
        Token {
            kind: lookup_ident(&literal),
            literal,
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.literal)
    }
}
