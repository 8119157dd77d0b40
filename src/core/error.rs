//! # Errors
//!
//! Lifecycle operations never fail. Errors only arise while configuring the
//! ambient stack around the engine.

use thiserror::Error;

/// Errors raised by NexG configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NexgError {
    #[error("Unknown log level '{0}' (expected CRITICAL, ERROR, WARNING, INFO, DEBUG, TRACE or NOTSET)")]
    InvalidLogLevel(String),
}

pub type NexgResult<T> = Result<T, NexgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_log_level_message_names_input() {
        let err = NexgError::InvalidLogLevel("loud".to_string());
        assert!(err.to_string().starts_with("Unknown log level 'loud'"));
    }
}
