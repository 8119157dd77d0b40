//! # Engine
//!
//! The engine itself. Adapters own it through the `Lifecycle` port.

mod nexg;

pub use nexg::Engine;
