//! Diagnostic logging set-up.
//!
//! Logs go to standard error and are filtered through `RUST_LOG`. The
//! default level is `warn` so an ordinary run prints nothing beyond the
//! usage line or the final diagnostic.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_LEVEL: &str = "warn";

/// Installs the global `tracing` subscriber. Later calls are ignored.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).try_init().ok();
}
