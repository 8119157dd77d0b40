//! # Python Bindings
//!
//! PyO3 bindings exposing the NexG engine lifecycle to Python.
//!
//! ## Python API
//!
//! ```python
//! import wheel_bind
//!
//! wheel_bind.config_logging("DEBUG")
//!
//! engine = wheel_bind.PyEngine()
//! engine.start()
//! engine.stop()
//! engine.close()
//! engine.start()  # ignored, the engine is already released
//!
//! with wheel_bind.PyEngine() as engine:
//!     engine.start()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::adapters::handle::EngineHandle;
use crate::core::LogConfig;
use crate::logging;

/// Python wrapper for the NexG engine
///
/// Owns one engine. After `close()` the wrapper is inert and further calls
/// are ignored. Garbage collection closes the engine if `close()` was never
/// called.
#[pyclass(name = "PyEngine")]
pub struct PyEngine {
    inner: EngineHandle,
}

#[pymethods]
impl PyEngine {
    #[new]
    fn new() -> Self {
        Self {
            inner: EngineHandle::new(),
        }
    }

    /// Start the engine
    fn start(&mut self) {
        self.inner.start();
    }

    /// Stop the engine
    fn stop(&mut self) {
        self.inner.stop();
    }

    /// Close the engine and release it
    fn close(&mut self) {
        self.inner.close();
    }

    /// Whether the engine has been released
    #[getter]
    fn closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn __enter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Close on leaving a `with` block; exceptions propagate
    fn __exit__(
        &mut self,
        _exc_type: &Bound<'_, PyAny>,
        _exc_value: &Bound<'_, PyAny>,
        _traceback: &Bound<'_, PyAny>,
    ) -> bool {
        self.inner.close();
        false
    }

    fn __repr__(&self) -> String {
        format!(
            "PyEngine(closed={})",
            if self.inner.is_closed() { "True" } else { "False" }
        )
    }
}

/// Configure the stdout log sink
///
/// The module configures INFO logging on import; calling this again only
/// changes the level.
///
/// Args:
///     log_level: CRITICAL, ERROR, WARNING, INFO, DEBUG, TRACE or NOTSET
///
/// Returns:
///     bool: True if this call installed the log sink
///
/// Raises:
///     ValueError: If the level name is not recognized
#[pyfunction]
#[pyo3(signature = (log_level = "INFO"))]
fn config_logging(log_level: &str) -> PyResult<bool> {
    logging::init_with_level(log_level).map_err(|e| PyValueError::new_err(format!("{}", e)))
}

/// NexG Python module
#[pymodule]
fn wheel_bind(m: &Bound<'_, PyModule>) -> PyResult<()> {
    logging::init(&LogConfig::default());

    m.add_class::<PyEngine>()?;
    m.add_function(wrap_pyfunction!(config_logging, m)?)?;

    m.add(
        "__doc__",
        "NexG wheel_bind, a high performance embedded graph database.",
    )?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
