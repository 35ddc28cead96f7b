#![allow(clippy::module_inception)]

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod normalizer;

extern crate regex;

pub use lexer::{lexer::tokenize, patterns::tokenize_with_patterns, tokens::Token, Engine};
pub use normalizer::normalizer::normalize;

/// Byte range `start..end` of a token in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
