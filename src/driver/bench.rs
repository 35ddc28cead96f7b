use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{
    lexer::{
        tokens::{same_lexemes, Token},
        Engine,
    },
    normalizer::normalizer::{normalize_with_stats, NormalizeStats},
};

/// One tokenization of a source plus the time taken by `iterations` rescans.
#[derive(Debug, Clone)]
pub struct BenchRun {
    pub label: &'static str,
    pub tokens: Vec<Token>,
    pub iterations: u32,
    pub elapsed: Duration,
}

impl BenchRun {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn per_scan(&self) -> Duration {
        self.elapsed / self.iterations.max(1)
    }
}

/// Scanning the raw source against scanning its normalized form.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub engine: Engine,
    pub before: BenchRun,
    pub normalized: NormalizeStats,
    pub after: BenchRun,
}

impl Comparison {
    pub fn tokens_agree(&self) -> bool {
        same_lexemes(&self.before.tokens, &self.after.tokens)
    }

    /// How many times faster the normalized scans ran. `None` when the
    /// normalized run was too quick to measure.
    pub fn speedup(&self) -> Option<f64> {
        let after = self.after.elapsed.as_secs_f64();
        if after > 0.0 {
            Some(self.before.elapsed.as_secs_f64() / after)
        } else {
            None
        }
    }
}

/// Runs `engine` over `source` `iterations` times and returns the wall time.
pub fn time_scans(engine: Engine, source: &str, iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(engine.tokenize(black_box(source)));
    }
    start.elapsed()
}

pub fn bench(label: &'static str, engine: Engine, source: &str, iterations: u32) -> BenchRun {
    let tokens = engine.tokenize(source);
    let elapsed = time_scans(engine, source, iterations);

    debug!(
        label,
        %engine,
        tokens = tokens.len(),
        iterations,
        elapsed_us = elapsed.as_micros() as u64,
        "benchmark run finished"
    );

    BenchRun {
        label,
        tokens,
        iterations,
        elapsed,
    }
}

pub fn compare(engine: Engine, source: &str, iterations: u32) -> Comparison {
    let before = bench("Before", engine, source, iterations);
    let normalized = normalize_with_stats(source);
    let after = bench("After", engine, &normalized.text, iterations);

    Comparison {
        engine,
        before,
        normalized,
        after,
    }
}
