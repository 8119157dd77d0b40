//! # Adapters
//!
//! Where the engine meets a foreign runtime:
//! - `EngineHandle` - exclusive, close-once ownership of an engine
//! - Python bindings (when enabled)

pub mod handle;

#[cfg(feature = "python")]
pub mod python;

pub use handle::EngineHandle;
