//! Lexical analysis.
//!
//! Converts source text into a flat stream of tokens:
//!
//! - Keywords (`int`, `float`, `if`, `else`, `return`) and identifiers
//! - Single-character tokens for everything else, digits included
//! - Whitespace is skipped and never produces a token
//!
//! Two engines implement the same rules: a hand-written character scanner
//! ([`lexer::tokenize`]) and a regex pattern table
//! ([`patterns::tokenize_with_patterns`]).

pub mod lexer;
pub mod patterns;
pub mod tokens;


use std::{fmt::Display, str::FromStr};

use tokens::Token;

/// Selects which lexer implementation a caller runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    Scanner,
    Patterns,
}

impl Engine {
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        match self {
            Engine::Scanner => lexer::tokenize(source),
            Engine::Patterns => patterns::tokenize_with_patterns(source),
        }
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::Scanner => write!(f, "scanner"),
            Engine::Patterns => write!(f, "patterns"),
        }
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scanner" => Ok(Engine::Scanner),
            "patterns" => Ok(Engine::Patterns),
            other => Err(format!("unknown engine `{}`, expected `scanner` or `patterns`", other)),
        }
    }
}
