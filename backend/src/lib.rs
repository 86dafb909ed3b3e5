//! BECCS RDM Core - Rust valuation engine
//!
//! Evaluates, for one state of the world (SOW), the lifetime value of
//! investing now in carbon capture at a biomass CHP plant versus waiting,
//! and the regret of the strategy actually chosen.
//!
//! # Architecture
//!
//! - **core**: Modelling horizon (2024-2050)
//! - **models**: Domain types (WorldState, Plant, PriceTrajectory, results)
//! - **prices**: Stochastic annual price paths
//! - **cashflow**: Wait and invest cash flows under the policy regime
//! - **valuation**: NPV and IRR
//! - **regret**: Regret of a strategy choice
//! - **orchestrator**: Single-SOW evaluation and batch runs
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded, one stream per SOW)
//! 2. Regret is never negative
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod cashflow;
pub mod core;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod prices;
pub mod regret;
pub mod rng;
pub mod valuation;

// Re-exports for convenience
pub use crate::core::horizon::{Horizon, HORIZON_YEARS, START_YEAR};
pub use error::ModelError;
pub use models::{
    CashFlowSeries, Financials, Plant, PlantDesign, PolicyRegime, PriceAssumptions, PriceModel,
    PriceTrajectory, Strategy, ValuationResult, WorldState,
};
pub use orchestrator::{
    evaluate, run_batch, BatchConfig, BatchReport, Evaluator, ExecutionMode, RobustnessSummary,
};
pub use regret::regret;
pub use rng::RngManager;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn beccs_rdm_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::evaluator::evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::evaluator::evaluate_batch, m)?)?;
    Ok(())
}
