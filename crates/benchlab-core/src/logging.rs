//! Logging setup for benchlab
//!
//! Thin wrapper over `tracing-subscriber` with env-filter support

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system with the default `info` filter
pub fn init() {
    init_with_filter("info");
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this more than once
/// leaves the first subscriber in place.
pub fn init_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
