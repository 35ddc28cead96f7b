use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the report on stdout; `RUST_LOG` overrides `level`.
pub fn init_logging(level: Level, json_output: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lexeme={},warn", level)));

    if json_output {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(fmt_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false);

        Registry::default().with(env_filter).with(fmt_layer).init();
    }
}
