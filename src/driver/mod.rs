//! Demonstration driver.
//!
//! Scans a source text, normalizes it, scans it again and reports token
//! counts and timings. It only uses the public lexer API.

pub mod bench;
pub mod report;
pub mod sample;

#[cfg(test)]
mod tests;

use std::{fs, io::Write, path::PathBuf};

use tracing::info;

use crate::{
    errors::errors::{Error, Result},
    lexer::Engine,
};

pub const DEFAULT_ITERATIONS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub iterations: u32,
    pub input: Option<PathBuf>,
    pub engine: Engine,
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            iterations: DEFAULT_ITERATIONS,
            input: None,
            engine: Engine::default(),
            quiet: false,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        Ok(())
    }

    /// Reads the configured input file, or falls back to the built-in sample.
    pub fn load_source(&self) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path).map_err(|source| Error::ReadInput {
                path: path.clone(),
                source,
            }),
            None => Ok(String::from(sample::SAMPLE_SOURCE)),
        }
    }
}

/// Runs the full before/after comparison and writes the report to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<bench::Comparison> {
    config.validate()?;
    let source = config.load_source()?;

    info!(
        engine = %config.engine,
        iterations = config.iterations,
        bytes = source.len(),
        from_file = config.input.is_some(),
        "starting comparison"
    );

    let comparison = bench::compare(config.engine, &source, config.iterations);
    report::write_report(out, &comparison, config.quiet)?;

    info!(
        before = comparison.before.token_count(),
        after = comparison.after.token_count(),
        agree = comparison.tokens_agree(),
        "comparison finished"
    );

    Ok(comparison)
}
