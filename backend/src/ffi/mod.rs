//! Python bindings
//!
//! Only compiled with the `pyo3` feature. The surface is two functions:
//! `evaluate` for one SOW and `evaluate_batch` for many.

pub mod evaluator;
pub mod types;
