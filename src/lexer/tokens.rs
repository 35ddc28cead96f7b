use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("int", Keyword::Int);
        map.insert("float", Keyword::Float);
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("return", Keyword::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Int,
    Float,
    If,
    Else,
    Return,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Int => "int",
            Keyword::Float => "float",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    /// Any character that is neither whitespace nor the start of a word,
    /// digits included.
    Punct(char),
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(_) => write!(f, "KEYWORD"),
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
            TokenKind::Punct(ch) => write!(f, "{}", ch),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.value)
    }
}

impl Token {
    /// Compares kind and value, ignoring where the token was found.
    pub fn same_lexeme(&self, other: &Token) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

/// Checks two token streams for the same `(kind, value)` sequence.
pub fn same_lexemes(left: &[Token], right: &[Token]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| l.same_lexeme(r))
}
