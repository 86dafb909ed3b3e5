//! Type conversion utilities for FFI boundary
//!
//! Converts between Python dicts and the Rust world-state and result types.
//! World states arrive as flat dicts keyed by parameter name; any key left
//! out takes its reference value.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::ModelError;
use crate::models::{
    Financials, PolicyRegime, PriceAssumptions, PriceModel, Strategy, ValuationResult, WorldState,
};

impl From<ModelError> for PyErr {
    fn from(err: ModelError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a field with a default value if missing.
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
///
/// # Example
/// ```ignore
/// let rate: f64 = extract_with_default(&py_dict, "discount_rate", 0.06)?;
/// ```
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// World State Parser
// ========================================================================

/// Convert a flat Python dict to a WorldState
///
/// The strategy is read from `decision` (0 = wait, 1 = invest). The price
/// model is `bounded_draw` unless `price_model` is `"beta_walk"`, in which
/// case the four `*_trend` keys are read too.
///
/// # Errors
///
/// Returns PyErr if:
/// - Type conversions fail
/// - `decision` is not 0 or 1
/// - `price_model` is unknown
/// - The assembled world state fails validation
pub fn parse_world_state(py_world: &Bound<'_, PyDict>) -> PyResult<WorldState> {
    let reference = WorldState::default();

    let strategy = match py_world.get_item("decision")? {
        Some(value) => Strategy::from_decision(value.extract()?)?,
        None => reference.strategy,
    };

    let p = &reference.prices;
    let prices = PriceAssumptions {
        electricity_mean: extract_with_default(py_world, "electricity_mean", p.electricity_mean)?,
        electricity_volatility: extract_with_default(
            py_world,
            "electricity_volatility",
            p.electricity_volatility,
        )?,
        heat_mean: extract_with_default(py_world, "heat_mean", p.heat_mean)?,
        heat_volatility: extract_with_default(py_world, "heat_volatility", p.heat_volatility)?,
        credit_mean: extract_with_default(py_world, "credit_mean", p.credit_mean)?,
        credit_volatility: extract_with_default(py_world, "credit_volatility", p.credit_volatility)?,
        biomass_price: extract_with_default(py_world, "biomass_price", p.biomass_price)?,
        allowance_2050: extract_with_default(py_world, "allowance_2050", p.allowance_2050)?,
        allowance_volatility: extract_with_default(
            py_world,
            "allowance_volatility",
            p.allowance_volatility,
        )?,
    };

    let price_model = parse_price_model(py_world)?;

    let f = &reference.financials;
    let financials = Financials {
        discount_rate: extract_with_default(py_world, "discount_rate", f.discount_rate)?,
        capex: extract_with_default(py_world, "capex", f.capex)?,
        capture_fixed_opex: extract_with_default(py_world, "capture_fixed_opex", f.capture_fixed_opex)?,
        variable_opex: extract_with_default(py_world, "variable_opex", f.variable_opex)?,
        transport_cost: extract_with_default(py_world, "transport_cost", f.transport_cost)?,
        storage_cost: extract_with_default(py_world, "storage_cost", f.storage_cost)?,
        learning_rate: extract_with_default(py_world, "learning_rate", f.learning_rate)?,
    };

    let r = &reference.policy;
    let policy = PolicyRegime {
        quota_year: extract_with_default(py_world, "quota_year", r.quota_year)?,
        eu_integration_year: extract_with_default(py_world, "eu_integration_year", r.eu_integration_year)?,
        biomass_ban_year: extract_with_default(py_world, "biomass_ban_year", r.biomass_ban_year)?,
        claim_year: extract_with_default(py_world, "claim_year", r.claim_year)?,
        // An explicit None disables the shock
        shock_year: extract_with_default(py_world, "shock_year", r.shock_year)?,
        auction_coverage: extract_with_default(py_world, "auction_coverage", r.auction_coverage)?,
    };

    let world = WorldState {
        strategy,
        prices,
        price_model,
        availability_factor: extract_with_default(
            py_world,
            "availability_factor",
            reference.availability_factor,
        )?,
        financials,
        policy,
    };
    world.validate()?;
    Ok(world)
}

fn parse_price_model(py_world: &Bound<'_, PyDict>) -> PyResult<PriceModel> {
    let kind: String = extract_with_default(py_world, "price_model", "bounded_draw".to_string())?;
    match kind.as_str() {
        "bounded_draw" => Ok(PriceModel::BoundedDraw),
        "beta_walk" => Ok(PriceModel::BetaWalk {
            electricity_trend: extract_with_default(py_world, "electricity_trend", 0.0)?,
            heat_trend: extract_with_default(py_world, "heat_trend", 0.0)?,
            credit_trend: extract_with_default(py_world, "credit_trend", 0.0)?,
            allowance_trend: extract_with_default(py_world, "allowance_trend", 0.0)?,
        }),
        other => Err(PyValueError::new_err(format!(
            "Invalid price_model: '{}'. Must be 'bounded_draw' or 'beta_walk'",
            other
        ))),
    }
}

// ========================================================================
// Result Conversion
// ========================================================================

/// Convert a ValuationResult to a Python dict
///
/// Scalar outputs are top-level keys; the per-year series are lists under
/// `series`.
pub fn valuation_result_to_py(py: Python<'_>, result: &ValuationResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);

    dict.set_item("decision", result.strategy.decision())?;
    dict.set_item("npv_invest", result.npv_invest)?;
    dict.set_item("npv_wait", result.npv_wait)?;
    dict.set_item("regret", result.regret)?;
    dict.set_item("irr", result.irr)?;
    dict.set_item("mean_electricity_price", result.mean_electricity_price)?;
    dict.set_item("mean_heat_price", result.mean_heat_price)?;
    dict.set_item("mean_credit_price", result.mean_credit_price)?;
    dict.set_item("mean_supported_credit_price", result.mean_supported_credit_price)?;
    dict.set_item("mean_allowance_price", result.mean_allowance_price)?;
    dict.set_item("allowance_price_2050", result.allowance_price_2050)?;
    dict.set_item("specific_abatement_cost", result.specific_abatement_cost)?;

    let series = PyDict::new_bound(py);
    series.set_item("electricity", result.electricity.clone())?;
    series.set_item("heat", result.heat.clone())?;
    series.set_item("credit", result.credit.clone())?;
    series.set_item("allowance", result.allowance.clone())?;
    series.set_item("supported_credit_price", result.supported_credit_price.clone())?;
    series.set_item("wait_cash_flows", result.wait_cash_flows.clone())?;
    series.set_item("invest_cash_flows", result.invest_cash_flows.clone())?;
    dict.set_item("series", series)?;

    Ok(dict.unbind())
}
