//! # Engine Handle
//!
//! Exclusive owner of one engine on behalf of a foreign runtime.
//!
//! The handle forwards lifecycle calls while it still holds the engine.
//! `close` forwards once and then releases the engine; afterwards every call
//! is silently ignored. Dropping the handle closes it, so the engine is
//! released on every exit path.

use crate::engine::Engine;
use crate::ports::Lifecycle;

/// Owning handle around a [`Lifecycle`] implementation
pub struct EngineHandle<E: Lifecycle = Engine> {
    /// `None` once closed
    engine: Option<E>,
}

impl EngineHandle<Engine> {
    /// Create a handle owning a fresh `Engine`
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }
}

impl Default for EngineHandle<Engine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Lifecycle> EngineHandle<E> {
    /// Take ownership of an existing engine
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    pub fn start(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.start();
        }
    }

    pub fn stop(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.stop();
        }
    }

    /// Close and release the engine. Idempotent.
    pub fn close(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.close();
        }
    }

    /// Whether the engine has been released
    pub fn is_closed(&self) -> bool {
        self.engine.is_none()
    }
}

impl<E: Lifecycle> Drop for EngineHandle<E> {
    fn drop(&mut self) {
        self.close();
    }
}
