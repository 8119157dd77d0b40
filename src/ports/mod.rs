//! # Ports
//!
//! Trait contracts between the engine and the adapters that own it.

/// Lifecycle of an engine
///
/// None of the operations can fail, and any order or multiplicity of calls
/// is legal. Owners such as `EngineHandle` stop forwarding after `close`.
pub trait Lifecycle {
    /// Start the engine
    fn start(&mut self);

    /// Stop the engine
    fn stop(&mut self);

    /// Close the engine
    fn close(&mut self);
}
