//! Error types for the valuation core
//!
//! The per-SOW computation itself is total. Errors only arise at the
//! boundary, when a WorldState or plant configuration is checked before
//! evaluation, or when inputs are serialized for fingerprinting.

use thiserror::Error;

/// Errors raised while validating or fingerprinting model inputs
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("Invalid world state: {0}")]
    InvalidWorldState(String),

    #[error("Invalid plant configuration: {0}")]
    InvalidPlant(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
