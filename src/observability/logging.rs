use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "art_catalog.log";
const DEFAULT_FILTER: &str = "art_catalog=info,warn";

/// Install the global subscriber: human-readable lines on stderr and JSON
/// lines in a daily file under `logs/`. `RUST_LOG` overrides the default filter.
///
/// Stdout is left to the CLI so `--json` output can be piped.
pub fn init_logging() {
    let file_guard = install(env_filter());
    // The file writer flushes on drop; the process exits without dropping it otherwise
    std::mem::forget(file_guard);
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn install(filter: EnvFilter) -> WorkerGuard {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("cannot create {}: {}", LOG_DIR, e);
    }

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    guard
}
