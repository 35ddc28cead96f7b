//! Integration tests for the public lexer API.
//!
//! These tests go through the crate root the way an external caller would:
//! tokenize, normalize, and run the driver comparison.

use lexeme::{
    driver::{bench::compare, sample::SAMPLE_SOURCE},
    lexer::tokens::{same_lexemes, Keyword, TokenKind},
    normalize, tokenize, tokenize_with_patterns, Engine, Token,
};

fn lexemes(tokens: &[Token]) -> Vec<(String, String)> {
    tokens
        .iter()
        .map(|t| (t.kind.to_string(), t.value.clone()))
        .collect()
}

#[test]
fn test_sample_program_tokens() {
    let tokens = tokenize(SAMPLE_SOURCE);

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Int));
    assert_eq!(tokens[1].value, "main");
    assert_eq!(tokens.last().map(|t| t.value.as_str()), Some("}"));

    let keywords: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind.is_keyword())
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(keywords, vec!["int", "int", "float", "if", "return", "else", "return"]);
}

#[test]
fn test_sample_declaration_line() {
    let tokens = tokenize("int x=10;float y=3.14;");
    let expected = vec![
        ("KEYWORD", "int"),
        ("IDENTIFIER", "x"),
        ("=", "="),
        ("1", "1"),
        ("0", "0"),
        (";", ";"),
        ("KEYWORD", "float"),
        ("IDENTIFIER", "y"),
        ("=", "="),
        ("3", "3"),
        (".", "."),
        ("1", "1"),
        ("4", "4"),
        (";", ";"),
    ];

    let expected: Vec<(String, String)> = expected
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(lexemes(&tokens), expected);
}

#[test]
fn test_normalized_sample_scans_identically() {
    let normalized = normalize(SAMPLE_SOURCE);

    assert!(normalized.len() < SAMPLE_SOURCE.len());
    assert!(same_lexemes(&tokenize(SAMPLE_SOURCE), &tokenize(&normalized)));
    assert_eq!(normalize(&normalized), normalized);
}

#[test]
fn test_engines_agree_on_sample() {
    assert_eq!(tokenize(SAMPLE_SOURCE), tokenize_with_patterns(SAMPLE_SOURCE));
}

#[test]
fn test_compare_with_each_engine() {
    for engine in [Engine::Scanner, Engine::Patterns] {
        let comparison = compare(engine, SAMPLE_SOURCE, 3);

        assert_eq!(comparison.engine, engine);
        assert!(comparison.tokens_agree());
        assert_eq!(comparison.after.iterations, 3);
    }
}

#[test]
fn test_scan_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || tokenize(&format!("int v{} = {};", i, i)).len()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}
