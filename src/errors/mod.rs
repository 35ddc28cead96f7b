//! Error types for the lexeme driver.
//!
//! The lexer itself cannot fail. Errors only come from the driver: reading
//! an input file or rejecting a run configuration.

pub mod errors;
