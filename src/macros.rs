//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span covering `len` bytes from `start`
//!
//! Both lexer engines build their tokens through these so the two stay
//! byte-for-byte comparable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "main".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span starting at `$start` and covering `$len` bytes.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $len:expr) => {
        Span {
            start: $start,
            end: $start + $len,
        }
    };
}
