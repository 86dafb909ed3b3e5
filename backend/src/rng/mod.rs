//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, deterministic draws. Every SOW evaluation
//! receives its own stream, derived from the batch seed and the SOW index,
//! so results do not depend on execution order or thread count.
//! CRITICAL: All randomness in the model MUST go through this module.

mod distributions;
mod substream;
mod xorshift;

pub use substream::derive_sow_seed;
pub use xorshift::RngManager;
