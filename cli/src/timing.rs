//! Logging setup and per-command latency reporting.
//!
//! Commands are annotated with `#[instrument]`; with `--timing` the span close
//! events (and their durations) are printed to stderr. Records emitted through
//! the `log` facade by `admin-users-business` are forwarded into the same
//! subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Default level when `RUST_LOG` is not set.
///
/// Span close events are logged at INFO, so `--timing` needs at least INFO.
pub fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if timing {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Initialize the tracing subscriber. Call once, before any command runs.
pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    let span_events = if timing {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
