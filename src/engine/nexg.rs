//! # NexG Engine
//!
//! The engine entry point. It carries no state yet: every lifecycle
//! operation emits one `info` event on the `nexg` target and returns.

use tracing::info;

use crate::logging::TARGET;
use crate::ports::Lifecycle;

/// The NexG engine
pub struct Engine {
    /// Forces construction through `Engine::new`
    _private: (),
}

impl Engine {
    pub fn new() -> Self {
        info!(target: TARGET, "Engine initialized.");
        Self { _private: () }
    }

    pub fn start(&mut self) {
        info!(target: TARGET, "Engine started.");
    }

    pub fn stop(&mut self) {
        info!(target: TARGET, "Engine stopped.");
    }

    pub fn close(&mut self) {
        info!(target: TARGET, "Engine closed.");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        info!(target: TARGET, "Engine destroyed.");
    }
}

impl Lifecycle for Engine {
    fn start(&mut self) {
        Engine::start(self);
    }

    fn stop(&mut self) {
        Engine::stop(self);
    }

    fn close(&mut self) {
        Engine::close(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture::LogCapture;

    #[test]
    fn test_engine_lifecycle_messages() {
        let capture = LogCapture::new();
        capture.run(|| {
            let mut engine = Engine::new();
            engine.start();
            engine.stop();
            engine.close();
        });

        let lines = capture.lines();
        assert_eq!(lines.len(), 5);
        let expected = [
            "Engine initialized.",
            "Engine started.",
            "Engine stopped.",
            "Engine closed.",
            "Engine destroyed.",
        ];
        for (line, message) in lines.iter().zip(expected) {
            assert!(line.contains("INFO"), "{line}");
            assert!(line.contains("nexg"), "{line}");
            assert!(line.ends_with(message), "{line}");
        }
    }

    #[test]
    fn test_engine_any_order_any_count() {
        let capture = LogCapture::new();
        capture.run(|| {
            let mut engine = Engine::default();
            engine.close();
            engine.stop();
            engine.stop();
            engine.start();
            engine.close();
            engine.start();
        });

        assert_eq!(capture.count("Engine started."), 2);
        assert_eq!(capture.count("Engine stopped."), 2);
        assert_eq!(capture.count("Engine closed."), 2);
        assert_eq!(capture.count("Engine destroyed."), 1);
    }

    #[test]
    fn test_engine_through_lifecycle_trait() {
        let capture = LogCapture::new();
        capture.run(|| {
            let mut engine: Box<dyn Lifecycle> = Box::new(Engine::new());
            engine.start();
            engine.stop();
            engine.close();
        });

        assert_eq!(capture.count("Engine started."), 1);
        assert_eq!(capture.count("Engine stopped."), 1);
        assert_eq!(capture.count("Engine closed."), 1);
    }
}
