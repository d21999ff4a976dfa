//! Logging setup on top of `tracing-subscriber`.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber with the default configuration.
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&Config::default()))
        .init();
}

/// Install the global `fmt` subscriber using `config.log_filter`.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns `false`
/// if another subscriber was already installed.
pub fn init_with(config: &Config) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .try_init()
        .is_ok()
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}
