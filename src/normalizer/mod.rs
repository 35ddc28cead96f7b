//! Whitespace normalization.
//!
//! Trims each line of a source text without touching anything the lexer
//! would turn into a token.

pub mod normalizer;
