//! Evaluation engine
//!
//! Runs the full valuation of one SOW:
//!
//! ```text
//! 1. Build the plant from the availability factor
//! 2. Generate the four price paths (SOW's own RNG stream)
//! 3. Compute wait and invest cash flows
//! 4. Discount both series to NPV
//! 5. Take the IRR of the capital-linked series
//! 6. Compute the regret of the chosen strategy
//! ```
//!
//! The evaluation performs no I/O and never fails; inputs are validated
//! beforehand by `WorldState::validate`.
//!
//! # Example
//!
//! ```rust
//! use beccs_rdm_core::{evaluate, RngManager, Strategy, WorldState};
//!
//! let world = WorldState::reference(Strategy::Invest);
//! let mut rng = RngManager::for_sow(7, 0);
//! let result = evaluate(&world, &mut rng);
//!
//! assert!(result.regret >= 0.0);
//! assert_eq!(result.invest_cash_flows.len(), 27);
//! ```

use tracing::debug;

use crate::cashflow::CashFlowEngine;
use crate::error::ModelError;
use crate::models::{Plant, PlantDesign, Strategy, ValuationResult, WorldState};
use crate::prices::PriceTrajectoryGenerator;
use crate::regret::regret;
use crate::rng::RngManager;
use crate::valuation::{internal_rate_of_return, net_present_value};

/// Evaluates SOWs for one fixed plant design
///
/// The design is shared read-only by every evaluation, so one `Evaluator`
/// can serve a whole batch across threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    design: PlantDesign,
    generator: PriceTrajectoryGenerator,
    cash_flows: CashFlowEngine,
}

impl Evaluator {
    /// Create an evaluator for `design`
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidPlant` if the design cannot capture any CO2
    pub fn new(design: PlantDesign) -> Result<Self, ModelError> {
        design.validate()?;
        Ok(Self {
            design,
            generator: PriceTrajectoryGenerator::new(),
            cash_flows: CashFlowEngine::new(),
        })
    }

    /// Evaluator for the reference plant
    pub fn reference() -> Self {
        Self {
            design: PlantDesign::reference(),
            generator: PriceTrajectoryGenerator::new(),
            cash_flows: CashFlowEngine::new(),
        }
    }

    pub fn design(&self) -> &PlantDesign {
        &self.design
    }

    /// Evaluate SOW `sow_index` of a batch seeded with `global_seed`
    pub fn evaluate_sow(&self, world: &WorldState, global_seed: u64, sow_index: u64) -> ValuationResult {
        let mut rng = RngManager::for_sow(global_seed, sow_index);
        self.evaluate(world, &mut rng)
    }

    /// Evaluate one SOW, drawing prices from `rng`
    pub fn evaluate(&self, world: &WorldState, rng: &mut RngManager) -> ValuationResult {
        let plant = Plant::new(&self.design, world.availability_factor);
        let prices = self.generator.generate_market_prices(world, rng);
        let financials = &world.financials;
        let policy = &world.policy;

        let wait = self
            .cash_flows
            .compute_cash_flows(&plant, &prices, financials, policy, Strategy::Wait);
        let invest = self
            .cash_flows
            .compute_cash_flows(&plant, &prices, financials, policy, Strategy::Invest);

        let npv_wait = net_present_value(&wait.cash_flows, financials.discount_rate);
        let npv_invest = net_present_value(&invest.cash_flows, financials.discount_rate);

        let capex_linked = self
            .cash_flows
            .capex_linked_cash_flows(&plant, &prices, financials, policy);
        let irr = internal_rate_of_return(&capex_linked);

        let regret = regret(npv_invest, npv_wait, world.strategy);

        debug!(
            strategy = ?world.strategy,
            npv_invest,
            npv_wait,
            regret,
            irr,
            "SOW evaluated"
        );

        ValuationResult {
            strategy: world.strategy,
            npv_invest,
            npv_wait,
            regret,
            irr,
            mean_electricity_price: prices.electricity.mean(),
            mean_heat_price: prices.heat.mean(),
            mean_credit_price: prices.credit.mean(),
            mean_supported_credit_price: invest.mean_supported_credit_price(),
            mean_allowance_price: prices.allowance.mean(),
            allowance_price_2050: prices.allowance.last(),
            specific_abatement_cost: invest.mean_specific_cost(),
            electricity: prices.electricity.values().to_vec(),
            heat: prices.heat.values().to_vec(),
            credit: prices.credit.values().to_vec(),
            allowance: prices.allowance.values().to_vec(),
            supported_credit_price: invest.supported_credit_price,
            wait_cash_flows: wait.cash_flows,
            invest_cash_flows: invest.cash_flows,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::reference()
    }
}

/// Evaluate one SOW of the reference plant
pub fn evaluate(world: &WorldState, rng: &mut RngManager) -> ValuationResult {
    Evaluator::reference().evaluate(world, rng)
}
