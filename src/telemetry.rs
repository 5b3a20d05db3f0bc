//! Tracing initialization.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set, e.g. `RUST_LOG=unobot=debug`; otherwise `default_filter` applies.
pub fn init(default_filter: &str) {
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
