//! # NexG
//!
//! Lifecycle scaffolding for a high performance embedded graph database.
//!
//! The engine does not store anything yet. It exposes `start`, `stop` and
//! `close`, each of which emits one log event, and a Python binding
//! (`wheel_bind`) that owns the engine and releases it exactly once.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         NexG                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (no I/O)                                               │
//! │    LogConfig, LogLevel, NexgError                            │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Lifecycle                                                 │
//! │                                                              │
//! │  ENGINE                                                      │
//! │    Engine - start / stop / close                             │
//! │                                                              │
//! │  ADAPTERS                                                    │
//! │    EngineHandle - owns an engine, close-once                 │
//! │    API: Python bindings                                      │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use wheel_bind::{EngineHandle, LogConfig};
//!
//! wheel_bind::logging::init(&LogConfig::default());
//!
//! let mut handle = EngineHandle::new();
//! handle.start();
//! handle.stop();
//! handle.close();
//!
//! // Released: further calls are ignored
//! handle.start();
//! assert!(handle.is_closed());
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - configuration and errors, no I/O
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Lifecycle trait
pub mod ports;

/// Adapter implementations
/// Contains: handle, python submodules
pub mod adapters;

/// Engine - the lifecycle stub
pub mod engine;

/// Subscriber bootstrap for engine events
pub mod logging;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

pub use crate::core::{LogConfig, LogLevel, NexgError, NexgResult};
pub use crate::ports::Lifecycle;
pub use crate::engine::Engine;
pub use crate::adapters::EngineHandle;
