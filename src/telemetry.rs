//! Tracing setup for the `vikor` binary.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Output goes to stderr
/// so that ranking output on stdout stays machine-readable. Calling this
/// more than once keeps the first subscriber.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    // try_init fails only when a subscriber is already installed.
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
