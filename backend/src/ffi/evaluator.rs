//! PyO3 entry points
//!
//! # Example (from Python)
//!
//! ```python
//! from beccs_rdm_core import evaluate, evaluate_batch
//!
//! result = evaluate({"decision": 1, "credit_mean": 80.0}, seed=42, sow_index=0)
//! print(result["npv_invest"], result["regret"])
//!
//! results = evaluate_batch([{"decision": 0}, {"decision": 1}], seed=42)
//! ```

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{parse_world_state, valuation_result_to_py};
use crate::orchestrator::{run_batch, BatchConfig, Evaluator};

/// Evaluate one SOW
///
/// The price paths are drawn from the substream for (`seed`, `sow_index`),
/// so the same triple always returns the same dict.
///
/// # Errors
///
/// Raises ValueError if the world state is malformed or out of range.
#[pyfunction]
#[pyo3(signature = (world, seed, sow_index = 0))]
pub fn evaluate(py: Python<'_>, world: &Bound<'_, PyDict>, seed: u64, sow_index: u64) -> PyResult<Py<PyDict>> {
    let world = parse_world_state(world)?;
    let result = py.allow_threads(|| Evaluator::reference().evaluate_sow(&world, seed, sow_index));
    valuation_result_to_py(py, &result)
}

/// Evaluate a list of SOWs
///
/// SOW `i` uses substream `i` of `seed`. Results come back in input order.
///
/// # Errors
///
/// Raises ValueError if any world state is malformed or out of range.
#[pyfunction]
pub fn evaluate_batch(py: Python<'_>, worlds: &Bound<'_, PyList>, seed: u64) -> PyResult<Py<PyList>> {
    let mut parsed = Vec::with_capacity(worlds.len());
    for item in worlds.iter() {
        let world_dict = item.downcast_into::<PyDict>()?;
        parsed.push(parse_world_state(&world_dict)?);
    }

    let config = BatchConfig::with_seed(seed);
    let report = py.allow_threads(|| run_batch(&parsed, &config))?;

    let list = PyList::empty_bound(py);
    for result in &report.results {
        list.append(valuation_result_to_py(py, result)?)?;
    }
    Ok(list.unbind())
}
