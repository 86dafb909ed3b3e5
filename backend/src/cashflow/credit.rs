//! Realizable credit price and carbon cash flow of one operating year

use serde::{Deserialize, Serialize};

use crate::core::horizon::Horizon;
use crate::models::{Financials, MarketPrices, Plant, PolicyRegime};

/// Carbon accounting of one operating year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditYear {
    /// Highest credit price realizable under the active policies [EUR/tCO2]
    pub supported_price: f64,
    /// Specific cost charged after learning and auction support [EUR/tCO2]
    pub specific_cost: f64,
    /// Credit revenue minus capture, transport and storage cost [EUR]
    pub carbon_cash_flow: f64,
}

impl CreditYear {
    /// Evaluate operating year `t` (t >= 2)
    ///
    /// Order matters: the quota comparison uses the specific cost before the
    /// auction reduction, and the sale gate overrides every price floor.
    pub fn compute(
        horizon: &Horizon,
        plant: &Plant,
        prices: &MarketPrices,
        financials: &Financials,
        policy: &PolicyRegime,
        t: usize,
    ) -> Self {
        let year = horizon.year_f64(t);
        let co2 = plant.co2_captured();

        let learning = 1.0 - financials.learning_rate * horizon.operating_experience(t) as f64;
        let mut specific_cost = (financials.variable_opex
            + financials.transport_cost
            + financials.storage_cost
            + financials.capture_fixed_opex / co2)
            * learning;

        let mut supported_price = prices.credit.at(t);
        if policy.quota_active(year) && specific_cost > supported_price {
            supported_price = specific_cost;
        }
        if policy.eu_integration_active(year) && prices.allowance.at(t) > supported_price {
            supported_price = prices.allowance.at(t);
        }
        if horizon.auction_active(t) {
            specific_cost *= 1.0 - policy.auction_coverage;
        }

        if !policy.credits_saleable(year) {
            supported_price = 0.0;
        }

        Self {
            supported_price,
            specific_cost,
            carbon_cash_flow: supported_price * co2 - specific_cost * co2,
        }
    }
}
