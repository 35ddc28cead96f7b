use std::path::PathBuf;

use super::{bench, report::write_report, run, sample::SAMPLE_SOURCE, RunConfig, DEFAULT_ITERATIONS};
use crate::{errors::errors::Error, lexer::Engine};

fn report_for(config: &RunConfig) -> String {
    let mut out: Vec<u8> = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_default_config() {
    let config = RunConfig::default();

    assert_eq!(config.iterations, DEFAULT_ITERATIONS);
    assert_eq!(config.engine, Engine::Scanner);
    assert!(config.input.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_iterations_rejected() {
    let config = RunConfig {
        iterations: 0,
        ..RunConfig::default()
    };
    let mut out: Vec<u8> = Vec::new();

    assert!(matches!(run(&config, &mut out), Err(Error::ZeroIterations)));
    assert!(out.is_empty());
}

#[test]
fn test_missing_input_file() {
    let config = RunConfig {
        input: Some(PathBuf::from("does/not/exist.c")),
        ..RunConfig::default()
    };

    match config.load_source() {
        Err(err @ Error::ReadInput { .. }) => assert_eq!(err.get_error_name(), "ReadInput"),
        other => panic!("expected ReadInput, got {:?}", other),
    }
}

#[test]
fn test_sample_is_default_source() {
    assert_eq!(RunConfig::default().load_source().unwrap(), SAMPLE_SOURCE);
}

#[test]
fn test_sample_token_count_survives_normalization() {
    let comparison = bench::compare(Engine::Scanner, SAMPLE_SOURCE, 1);

    assert!(comparison.tokens_agree());
    assert_eq!(comparison.before.token_count(), comparison.after.token_count());
    assert!(comparison.normalized.removed_bytes > 0);
    assert_eq!(comparison.before.iterations, 1);
}

#[test]
fn test_report_sections() {
    let config = RunConfig {
        iterations: 2,
        ..RunConfig::default()
    };
    let report = report_for(&config);

    assert!(report.contains("Tokens Before Optimization:"));
    assert!(report.contains("Token(KEYWORD, int)"));
    assert!(report.contains("Token(IDENTIFIER, printf)"));
    assert!(report.contains("Optimized Code:\n\nint main() {\nint x=10;float y=3.14;"));
    assert!(report.contains("Tokens After Optimization:"));
    assert!(report.contains("Runtime Efficiency After Optimization:"));
    assert!(report.contains("token streams agree"));
}

#[test]
fn test_quiet_report_omits_token_listing() {
    let config = RunConfig {
        iterations: 1,
        quiet: true,
        engine: Engine::Patterns,
        ..RunConfig::default()
    };
    let report = report_for(&config);

    assert!(!report.contains("Token(KEYWORD, int)"));
    assert!(report.contains("Number of Tokens Before Optimization:"));
    assert!(report.contains("patterns engine"));
}

#[test]
fn test_report_counts_match_runs() {
    let comparison = bench::compare(Engine::Scanner, "int x;", 1);
    let mut out: Vec<u8> = Vec::new();
    write_report(&mut out, &comparison, true).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.contains("Number of Tokens Before Optimization: 3"));
    assert!(report.contains("Number of Tokens After Optimization: 3"));
}
