//! Cash-flow engine
//!
//! Converts the price paths, the plant and the policy regime into one
//! annual cash-flow series per strategy.
//!
//! # Strategy Accounting
//!
//! ```text
//! Wait, every year t:
//!   energy(wait outputs) - [CO2 × allowance if biomass ban in force]
//!
//! Invest, construction years (t = 0, 1):
//!   energy(wait outputs) - CAPEX / 2
//!
//! Invest, operating years (t >= 2):
//!   energy(invest outputs) + credit price × CO2 - specific cost × CO2
//! ```
//!
//! The credit price of an operating year is the highest price realizable
//! under the active policy regime (see [`CreditYear`]).
//!
//! # Critical Invariants
//!
//! - Capital expenditure charged across the construction years sums to CAPEX
//! - Credits sell at 0 whenever the ban is in force or the year is not
//!   strictly after the claim year

mod credit;

pub use credit::CreditYear;

use crate::core::horizon::Horizon;
use crate::models::{CashFlowSeries, Financials, MarketPrices, Plant, PolicyRegime, Strategy};

/// Builds annual cash flows for the wait and invest strategies
#[derive(Debug, Clone, Copy, Default)]
pub struct CashFlowEngine {
    horizon: Horizon,
}

impl CashFlowEngine {
    pub fn new() -> Self {
        Self {
            horizon: Horizon::standard(),
        }
    }

    /// Cash flows of `strategy` over the whole horizon
    ///
    /// # Example
    /// ```
    /// use beccs_rdm_core::cashflow::CashFlowEngine;
    /// use beccs_rdm_core::models::{MarketPrices, PriceTrajectory};
    /// use beccs_rdm_core::{Financials, Plant, PlantDesign, PolicyRegime, Strategy};
    ///
    /// let plant = Plant::new(&PlantDesign::reference(), 0.7);
    /// let prices = MarketPrices {
    ///     electricity: PriceTrajectory::constant(50.0),
    ///     heat: PriceTrajectory::constant(50.0),
    ///     credit: PriceTrajectory::constant(30.0),
    ///     allowance: PriceTrajectory::constant(100.0),
    ///     biomass: 25.0,
    /// };
    /// let financials = Financials::default();
    ///
    /// let invest = CashFlowEngine::new().compute_cash_flows(
    ///     &plant, &prices, &financials, &PolicyRegime::default(), Strategy::Invest,
    /// );
    /// assert_eq!(invest.cash_flows.len(), 27);
    /// assert_eq!(invest.total_capex(), financials.capex);
    /// ```
    pub fn compute_cash_flows(
        &self,
        plant: &Plant,
        prices: &MarketPrices,
        financials: &Financials,
        policy: &PolicyRegime,
        strategy: Strategy,
    ) -> CashFlowSeries {
        match strategy {
            Strategy::Wait => self.wait_cash_flows(plant, prices, policy),
            Strategy::Invest => self.invest_cash_flows(plant, prices, financials, policy),
        }
    }

    /// Cash flows isolating the effect of the capital expenditure
    ///
    /// Used only for the IRR of investing, never for NPV: CAPEX in the
    /// construction years, then the energy penalty of running the capture
    /// unit, the carbon cash flow, and any allowance costs avoided.
    pub fn capex_linked_cash_flows(
        &self,
        plant: &Plant,
        prices: &MarketPrices,
        financials: &Financials,
        policy: &PolicyRegime,
    ) -> Vec<f64> {
        let wait = plant.outputs(Strategy::Wait);
        let invest = plant.outputs(Strategy::Invest);

        self.horizon
            .indices()
            .map(|t| {
                if self.horizon.is_construction_year(t) {
                    return -financials.capex / 2.0;
                }

                let energy_penalty = ((wait.power_mw - invest.power_mw) * prices.electricity.at(t)
                    + (wait.heat_mw - invest.heat_mw) * prices.heat.at(t))
                    * plant.operating_hours();
                let credit = CreditYear::compute(&self.horizon, plant, prices, financials, policy, t);

                let mut cash_flow = -energy_penalty + credit.carbon_cash_flow;
                cash_flow += self.allowance_cost(plant, prices, policy, t);
                cash_flow
            })
            .collect()
    }

    fn wait_cash_flows(&self, plant: &Plant, prices: &MarketPrices, policy: &PolicyRegime) -> CashFlowSeries {
        let years = self.horizon.len();
        let cash_flows = self
            .horizon
            .indices()
            .map(|t| {
                energy_cash_flow(plant, Strategy::Wait, prices, t)
                    - self.allowance_cost(plant, prices, policy, t)
            })
            .collect();

        CashFlowSeries {
            strategy: Strategy::Wait,
            cash_flows,
            supported_credit_price: vec![0.0; years],
            specific_cost: vec![0.0; years],
            capital_expenditure: vec![0.0; years],
        }
    }

    fn invest_cash_flows(
        &self,
        plant: &Plant,
        prices: &MarketPrices,
        financials: &Financials,
        policy: &PolicyRegime,
    ) -> CashFlowSeries {
        let years = self.horizon.len();
        let mut series = CashFlowSeries {
            strategy: Strategy::Invest,
            cash_flows: Vec::with_capacity(years),
            supported_credit_price: Vec::with_capacity(years),
            specific_cost: Vec::with_capacity(years),
            capital_expenditure: Vec::with_capacity(years),
        };

        for t in self.horizon.indices() {
            if self.horizon.is_construction_year(t) {
                // Not yet upgraded: wait outputs, no credits to sell
                let capex = financials.capex / 2.0;
                let market_price = if policy.biomass_ban_active(self.horizon.year_f64(t)) {
                    0.0
                } else {
                    prices.credit.at(t)
                };

                series
                    .cash_flows
                    .push(energy_cash_flow(plant, Strategy::Wait, prices, t) - capex);
                series.supported_credit_price.push(market_price);
                series.specific_cost.push(0.0);
                series.capital_expenditure.push(capex);
                continue;
            }

            let credit = CreditYear::compute(&self.horizon, plant, prices, financials, policy, t);
            let energy = energy_cash_flow(plant, Strategy::Invest, prices, t);

            series.cash_flows.push(energy + credit.carbon_cash_flow);
            series.supported_credit_price.push(credit.supported_price);
            series.specific_cost.push(credit.specific_cost);
            series.capital_expenditure.push(0.0);
        }

        series
    }

    /// Allowances owed for uncaptured CO2 once the biomass ban is in force
    fn allowance_cost(&self, plant: &Plant, prices: &MarketPrices, policy: &PolicyRegime, t: usize) -> f64 {
        if policy.biomass_ban_active(self.horizon.year_f64(t)) {
            plant.co2_captured() * prices.allowance.at(t)
        } else {
            0.0
        }
    }
}

/// Energy sales minus fuel and fixed plant costs in year `t`
fn energy_cash_flow(plant: &Plant, configuration: Strategy, prices: &MarketPrices, t: usize) -> f64 {
    let outputs = plant.outputs(configuration);
    (outputs.power_mw * prices.electricity.at(t) + outputs.heat_mw * prices.heat.at(t)
        - plant.biomass_input() * prices.biomass)
        * plant.operating_hours()
        - plant.fixed_operating_cost()
}
