use crate::{Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// A word starts with an ASCII letter or an underscore.
pub fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// After the first character a word may continue with any alphanumeric
/// character, Unicode letters and digits included.
pub fn is_word_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub(crate) fn word_kind(word: &str) -> TokenKind {
    match RESERVED_LOOKUP.get(word) {
        Some(keyword) => TokenKind::Keyword(*keyword),
        None => TokenKind::Identifier,
    }
}

/// Cursor over a single source string.
///
/// Every call to [`tokenize`] builds its own `Lexer`, so no state is shared
/// between scans. The lexer can also be driven directly as an iterator.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, pos: 0 }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.at() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance_n(ch.len_utf8());
        }
    }

    fn word(&mut self) -> Token {
        let rest = self.remainder();
        let len = rest
            .char_indices()
            .find(|(_, ch)| !is_word_continue(*ch))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let value = &rest[..len];

        let token = MK_TOKEN!(word_kind(value), String::from(value), MK_SPAN!(self.pos, len));
        self.advance_n(len);
        token
    }

    fn single(&mut self, ch: char) -> Token {
        let token = MK_TOKEN!(TokenKind::Punct(ch), ch.to_string(), MK_SPAN!(self.pos, ch.len_utf8()));
        self.advance_n(ch.len_utf8());
        token
    }

    /// Scans the next token, or returns `None` once only whitespace remains.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let ch = self.at()?;
        if is_word_start(ch) {
            Some(self.word())
        } else {
            Some(self.single(ch))
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Splits `source` into keywords, identifiers and single-character tokens.
///
/// Never fails: any character that is not whitespace and cannot start a word
/// becomes a one-character [`TokenKind::Punct`] token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
