//! tracing-subscriber setup for the binary.

use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; `default_level` is used when it is unset or invalid.
pub fn init(default_level: &str) -> color_eyre::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => fallback_filter(default_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre!("Failed to set tracing subscriber: {e}"))
}

/// Filter built from `level` alone, ignoring the environment.
pub fn fallback_filter(level: &str) -> color_eyre::Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| eyre!("Invalid log level {level:?}: {e}"))
}

#[cfg(test)]
mod tests;
