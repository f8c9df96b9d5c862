//! Logging Infrastructure
//!
//! Console logging for applications embedding the admin client. `RUST_LOG`
//! overrides the configured level when set.

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "mebel_client=trace")
/// * `json_format` - JSON lines instead of the human-readable format
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Examples
/// ```no_run
/// mebel_client::logger::init_logger("debug", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| anyhow::anyhow!("invalid log level {level:?}: {e}"))?;

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    if tracing_subscriber::registry()
        .with(console_layer.with_filter(env_filter))
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
    Ok(())
}

/// Initialize from a loaded [`crate::ClientConfig`]
pub fn init_from_config(config: &crate::ClientConfig) -> anyhow::Result<()> {
    init_logger(&config.log_level, config.log_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent() {
        assert!(init_logger("info", false).is_ok());
        assert!(init_logger("debug", true).is_ok());
    }
}
