//! # Core
//!
//! Pure types with no I/O.
//!
//! Contains:
//! - `LogConfig` / `LogLevel` - logging configuration
//! - `NexgError` - the crate error type

pub mod config;
pub mod error;

pub use config::{LogConfig, LogLevel};
pub use error::{NexgError, NexgResult};
