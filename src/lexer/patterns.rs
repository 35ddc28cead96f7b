//! Regex-driven lexer sharing the rule set of [`super::lexer`].
//!
//! Patterns are tried in order against the remainder of the source and the
//! first one that matches at the cursor wins. The table is compiled once per
//! process.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_SPAN, MK_TOKEN};

use super::{
    lexer::word_kind,
    tokens::{Token, TokenKind},
};

pub type RegexHandler = fn(&mut PatternLexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: compile(r"\A\s+"), handler: skip_handler },
        RegexPattern { regex: compile(r"\A[a-zA-Z_][\p{Alphabetic}\p{N}_]*"), handler: word_handler },
        RegexPattern { regex: compile(r"(?s)\A."), handler: single_handler },
    ];
}

fn compile(pattern: &str) -> Regex {
    // Patterns are literals above; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid lexer pattern {pattern:?}: {err}"))
}

pub struct PatternLexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> PatternLexer<'a> {
    fn new(source: &'a str) -> PatternLexer<'a> {
        PatternLexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut PatternLexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn word_handler(lexer: &mut PatternLexer, matched: &str) {
    lexer.push(MK_TOKEN!(word_kind(matched), String::from(matched), MK_SPAN!(lexer.pos, matched.len())));
    lexer.advance_n(matched.len());
}

fn single_handler(lexer: &mut PatternLexer, matched: &str) {
    // `(?s)\A.` matches exactly one scalar value.
    if let Some(ch) = matched.chars().next() {
        lexer.push(MK_TOKEN!(TokenKind::Punct(ch), String::from(matched), MK_SPAN!(lexer.pos, matched.len())));
    }
    lexer.advance_n(matched.len());
}

/// Tokenizes `source` with the pattern table.
///
/// Produces the same tokens, spans included, as [`super::lexer::tokenize`].
pub fn tokenize_with_patterns(source: &str) -> Vec<Token> {
    let mut lex = PatternLexer::new(source);

    while !lex.at_eof() {
        let rest = lex.remainder();
        let hit = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(rest).map(|m| (pattern.handler, m.as_str())));

        match hit {
            Some((handler, matched)) => handler(&mut lex, matched),
            // Unreachable: the last pattern accepts any character.
            None => break,
        }
    }

    lex.tokens
}
