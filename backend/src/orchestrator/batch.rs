//! Batch evaluation
//!
//! Evaluates a population of SOWs. Every SOW gets its own RNG stream
//! derived from the batch seed and its index, so the parallel and
//! sequential modes produce identical results in identical order.
//!
//! # Example
//!
//! ```rust
//! use beccs_rdm_core::orchestrator::{run_batch, BatchConfig};
//! use beccs_rdm_core::{Strategy, WorldState};
//!
//! let worlds = vec![WorldState::reference(Strategy::Invest); 4];
//! let report = run_batch(&worlds, &BatchConfig::with_seed(7)).unwrap();
//!
//! assert_eq!(report.results.len(), 4);
//! assert_eq!(report.robustness.sows, 4);
//! ```

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::engine::Evaluator;
use super::fingerprint::compute_config_hash;
use super::robustness::RobustnessSummary;
use crate::error::ModelError;
use crate::models::{PlantDesign, ValuationResult, WorldState};

/// How SOWs of a batch are scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Parallel,
    Sequential,
}

/// Batch-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Seed from which every SOW stream is derived
    pub global_seed: u64,
    pub mode: ExecutionMode,
    pub design: PlantDesign,
}

impl BatchConfig {
    /// Parallel batch of the reference plant
    pub fn with_seed(global_seed: u64) -> Self {
        Self {
            global_seed,
            mode: ExecutionMode::Parallel,
            design: PlantDesign::reference(),
        }
    }
}

/// Results of a batch, in SOW order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Identifier of this run (not part of the reproducible output)
    pub run_id: Uuid,
    pub global_seed: u64,
    /// SHA-256 of the inputs, seed and plant design
    pub config_hash: String,
    pub results: Vec<ValuationResult>,
    pub robustness: RobustnessSummary,
}

#[derive(Serialize)]
struct BatchInputs<'a> {
    global_seed: u64,
    design: &'a PlantDesign,
    worlds: &'a [WorldState],
}

/// Validate and evaluate every SOW of `worlds`
///
/// # Errors
///
/// - `ModelError::InvalidWorldState` naming the first invalid SOW
/// - `ModelError::InvalidPlant` if the plant design is unusable
/// - `ModelError::Serialization` if the inputs cannot be fingerprinted
pub fn run_batch(worlds: &[WorldState], config: &BatchConfig) -> Result<BatchReport, ModelError> {
    validate_worlds(worlds)?;
    let evaluator = Evaluator::new(config.design.clone())?;
    let config_hash = compute_config_hash(&BatchInputs {
        global_seed: config.global_seed,
        design: &config.design,
        worlds,
    })?;

    let started = Instant::now();
    let seed = config.global_seed;
    let results: Vec<ValuationResult> = match config.mode {
        ExecutionMode::Parallel => worlds
            .par_iter()
            .enumerate()
            .map(|(index, world)| evaluator.evaluate_sow(world, seed, index as u64))
            .collect(),
        ExecutionMode::Sequential => worlds
            .iter()
            .enumerate()
            .map(|(index, world)| evaluator.evaluate_sow(world, seed, index as u64))
            .collect(),
    };
    let robustness = RobustnessSummary::from_results(&results);

    info!(
        sows = results.len(),
        seed,
        mode = ?config.mode,
        config_hash = %config_hash,
        elapsed_ms = started.elapsed().as_millis() as u64,
        regret_free = robustness.regret_free,
        "batch evaluated"
    );

    Ok(BatchReport {
        run_id: Uuid::new_v4(),
        global_seed: seed,
        config_hash,
        results,
        robustness,
    })
}

/// Validate every SOW, reporting the index of the first failure
pub fn validate_worlds(worlds: &[WorldState]) -> Result<(), ModelError> {
    for (index, world) in worlds.iter().enumerate() {
        world.validate().map_err(|e| match e {
            ModelError::InvalidWorldState(msg) => {
                ModelError::InvalidWorldState(format!("SOW {}: {}", index, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strategy;

    #[test]
    fn test_invalid_sow_index_reported() {
        let mut worlds = vec![WorldState::reference(Strategy::Invest); 3];
        worlds[2].availability_factor = 1.5;

        let err = run_batch(&worlds, &BatchConfig::with_seed(1)).unwrap_err();
        match err {
            ModelError::InvalidWorldState(msg) => assert!(msg.starts_with("SOW 2:"), "{}", msg),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_batch() {
        let report = run_batch(&[], &BatchConfig::with_seed(1)).unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.robustness, RobustnessSummary::default());
    }
}
