use std::io::{self, Write};

use super::bench::{BenchRun, Comparison};

fn write_run<W: Write>(out: &mut W, run: &BenchRun, quiet: bool) -> io::Result<()> {
    if !quiet {
        writeln!(out, "\nTokens {} Optimization:", run.label)?;
        for token in &run.tokens {
            writeln!(out, "{}", token)?;
        }
    }

    writeln!(out, "\nNumber of Tokens {} Optimization: {}", run.label, run.token_count())?;
    writeln!(
        out,
        "\nRuntime Efficiency {} Optimization: {:.5} seconds",
        run.label,
        run.elapsed.as_secs_f64()
    )
}

/// Writes the before/after report for a comparison.
pub fn write_report<W: Write>(out: &mut W, comparison: &Comparison, quiet: bool) -> io::Result<()> {
    write_run(out, &comparison.before, quiet)?;

    writeln!(out, "\nOptimized Code:")?;
    writeln!(out, "{}", comparison.normalized.text)?;

    write_run(out, &comparison.after, quiet)?;

    writeln!(out, "\nSummary ({} engine, {} iterations):", comparison.engine, comparison.before.iterations)?;
    writeln!(
        out,
        "  removed {} whitespace bytes across {} lines",
        comparison.normalized.removed_bytes, comparison.normalized.lines
    )?;
    writeln!(
        out,
        "  token streams {}",
        if comparison.tokens_agree() { "agree" } else { "differ" }
    )?;
    writeln!(
        out,
        "  per scan: {:?} before, {:?} after",
        comparison.before.per_scan(),
        comparison.after.per_scan()
    )?;
    match comparison.speedup() {
        Some(ratio) => writeln!(out, "  speedup: {:.2}x", ratio),
        None => writeln!(out, "  speedup: n/a"),
    }
}
