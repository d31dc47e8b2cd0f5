//! Span timing for the search, enabled with `--features instrumentation`.
//!
//! Respects the RUST_LOG environment variable, e.g.
//! `RUST_LOG=filler=trace cargo run --features instrumentation -- watch`.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Each instrumented span reports its
/// elapsed time when it closes.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
