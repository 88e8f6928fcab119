//! Tracing setup: terminal plus a daily rolling log file.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Keep the guard alive until exit so the
/// file writer flushes.
pub fn init(debug: bool) -> WorkerGuard {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flights")
        .join("logs");
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = rolling::daily(&log_dir, "flights.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = if debug {
        EnvFilter::new("flight_db=debug,flight_cli=debug,info")
    } else {
        EnvFilter::new("flight_db=info,flight_cli=info,warn")
    };
    let terminal_filter = if debug {
        EnvFilter::new("flight_db=debug,flight_cli=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let terminal_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(debug)
        .with_filter(terminal_filter);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(terminal_layer)
        .with(file_layer)
        .init();

    guard
}
