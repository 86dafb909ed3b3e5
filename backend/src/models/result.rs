//! Cash-flow series and valuation results

use serde::{Deserialize, Serialize};

use crate::core::horizon::CONSTRUCTION_YEARS;
use crate::models::world_state::Strategy;

/// Annual cash flows of one strategy
///
/// Alongside the cash flows the engine records, per year, the highest
/// credit price realizable under the active policy regime, the specific
/// abatement cost actually charged, and the capital expenditure spent.
/// All vectors have one entry per horizon year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    pub strategy: Strategy,
    /// Net cash flow per year [EUR]
    pub cash_flows: Vec<f64>,
    /// Highest realizable credit price per year [EUR/tCO2]
    pub supported_credit_price: Vec<f64>,
    /// Specific abatement cost charged per year, 0 when not capturing [EUR/tCO2]
    pub specific_cost: Vec<f64>,
    /// Capital expenditure spent per year [EUR]
    pub capital_expenditure: Vec<f64>,
}

impl CashFlowSeries {
    /// Total capital expenditure across the horizon
    pub fn total_capex(&self) -> f64 {
        self.capital_expenditure.iter().sum()
    }

    /// Mean of the supported credit price over the horizon
    pub fn mean_supported_credit_price(&self) -> f64 {
        mean(&self.supported_credit_price)
    }

    /// Mean specific cost over the years in which CO2 is captured
    pub fn mean_specific_cost(&self) -> f64 {
        match self.strategy {
            Strategy::Wait => 0.0,
            Strategy::Invest => {
                let operating = self.specific_cost.get(CONSTRUCTION_YEARS..).unwrap_or(&[]);
                mean(operating)
            }
        }
    }
}

/// Output of one SOW evaluation
///
/// Every evaluation produces the same fields, so a batch of results can be
/// treated as homogeneous rows by downstream analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Strategy chosen in this SOW
    pub strategy: Strategy,
    pub npv_invest: f64,
    pub npv_wait: f64,
    /// NPV gap between the best strategy and the chosen one (>= 0)
    pub regret: f64,
    /// IRR of the capital-linked cash flows of investing (0 when no real root)
    pub irr: f64,

    pub mean_electricity_price: f64,
    pub mean_heat_price: f64,
    pub mean_credit_price: f64,
    pub mean_supported_credit_price: f64,
    pub mean_allowance_price: f64,
    pub allowance_price_2050: f64,
    /// Mean specific abatement cost over the operating years [EUR/tCO2]
    pub specific_abatement_cost: f64,

    pub electricity: Vec<f64>,
    pub heat: Vec<f64>,
    pub credit: Vec<f64>,
    pub allowance: Vec<f64>,
    pub supported_credit_price: Vec<f64>,
    pub wait_cash_flows: Vec<f64>,
    pub invest_cash_flows: Vec<f64>,
}

impl ValuationResult {
    /// NPV of a given strategy
    pub fn npv(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Wait => self.npv_wait,
            Strategy::Invest => self.npv_invest,
        }
    }

    /// Whether the chosen strategy is also the NPV-maximizing one
    pub fn is_regret_free(&self) -> bool {
        self.regret == 0.0
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
