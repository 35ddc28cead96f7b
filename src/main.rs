use std::{io, path::PathBuf};

use clap::Parser;
use lexeme::{
    driver::{run, RunConfig, DEFAULT_ITERATIONS},
    lexer::Engine,
    logging::init_logging,
};
use tracing::{error, Level};

/// Tokenize a C-like source before and after whitespace normalization and
/// compare the results.
#[derive(Parser, Debug)]
#[command(name = "lexeme", version)]
struct Args {
    /// Number of timed scans per source
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Read the source from a file instead of the built-in sample
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Lexer implementation to run (`scanner` or `patterns`)
    #[arg(short, long, default_value_t = Engine::Scanner)]
    engine: Engine,

    /// Only print counts, code and timings
    #[arg(short, long)]
    quiet: bool,

    /// Emit diagnostic logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            iterations: args.iterations,
            input: args.input,
            engine: args.engine,
            quiet: args.quiet,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(Level::INFO, args.log_json);

    let config = RunConfig::from(args);
    let stdout = io::stdout();

    if let Err(e) = run(&config, &mut stdout.lock()) {
        error!(kind = e.get_error_name(), "run failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
