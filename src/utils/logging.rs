//! Logging setup for the binary.
//!
//! Log output goes to stderr so that converted values and records on stdout
//! stay machine-readable. The level is taken from `RUST_LOG` and defaults to
//! `warn`.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer().with_writer(std::io::stderr).event_format(
            fmt::format()
                .with_level(true)
                .with_target(false)
                .with_ansi(console::colors_enabled_stderr())
                .compact(),
        ),
    );

    // a subscriber may already be installed, e.g. under test harnesses
    let _ = subscriber.try_init();
}
