//! Orchestration of SOW evaluations
//!
//! - `engine`: evaluation of a single SOW
//! - `batch`: validated, reproducible evaluation of a population of SOWs
//! - `robustness`: satisficing and min-max regret summaries
//! - `fingerprint`: SHA-256 of batch inputs

pub mod batch;
pub mod engine;
pub mod fingerprint;
pub mod robustness;

// Re-export main types for convenience
pub use batch::{run_batch, validate_worlds, BatchConfig, BatchReport, ExecutionMode};
pub use engine::{evaluate, Evaluator};
pub use fingerprint::compute_config_hash;
pub use robustness::RobustnessSummary;
