//! # Logging
//!
//! Installs the process-wide `tracing` subscriber that writes engine events
//! to stdout. The library never does this on its own; the Python module calls
//! [`init`] at import time and again from `config_logging`.
//!
//! The level sits behind a reload layer so it can be changed after the
//! subscriber is installed. Output formatting (ANSI) is fixed at install.

use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, Registry};

use crate::core::{LogConfig, LogLevel, NexgResult};

/// Target used by every engine event
pub const TARGET: &str = "nexg";

static LEVEL_HANDLE: OnceLock<reload::Handle<LevelFilter, Registry>> = OnceLock::new();

/// Install the stdout subscriber, or update its level if already installed
///
/// Returns `true` only when this call installed the subscriber. A subscriber
/// installed by someone else is left untouched.
pub fn init(config: &LogConfig) -> bool {
    let level = LevelFilter::from_level(config.level.as_tracing());

    if let Some(handle) = LEVEL_HANDLE.get() {
        if let Err(error) = handle.modify(|filter| *filter = level) {
            tracing::debug!(target: TARGET, error = %error, "Failed to update log level");
        }
        return false;
    }

    let (filter, handle) = reload::Layer::new(level);
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(config.ansi).with_target(true))
        .try_init()
        .is_ok();
    if installed {
        let _ = LEVEL_HANDLE.set(handle);
    }
    installed
}

/// [`init`] with a level given by name (e.g. `"INFO"`)
pub fn init_with_level(name: &str) -> NexgResult<bool> {
    let level: LogLevel = name.parse()?;
    Ok(init(&LogConfig::new(level)))
}


#[cfg(test)]
mod tests {
    use super::capture::LogCapture;
    use super::*;
    use crate::core::NexgError;

    #[test]
    fn test_init_with_level_rejects_unknown_name() {
        let err = init_with_level("chatty").unwrap_err();
        assert_eq!(err, NexgError::InvalidLogLevel("chatty".to_string()));
    }

    #[test]
    fn test_second_init_updates_level() {
        let _ = init(&LogConfig::default());
        assert!(!init(&LogConfig::default()));
        assert_eq!(init_with_level("DEBUG"), Ok(false));

        if let Some(handle) = LEVEL_HANDLE.get() {
            assert_eq!(handle.clone_current(), Some(LevelFilter::DEBUG));
        }
    }

    #[test]
    fn test_capture_records_target_and_level() {
        let capture = LogCapture::new();
        capture.run(|| tracing::info!(target: TARGET, "hello"));

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("nexg"));
        assert!(lines[0].ends_with("hello"));
    }
}
