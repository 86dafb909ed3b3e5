//! World state (SOW) inputs
//!
//! One `WorldState` holds every uncertain or lever parameter of a single
//! evaluation. It is read-only for the duration of the evaluation.
//!
//! All structs deserialize with nominal reference values for any field
//! that is left out, so a driver only has to supply what it samples.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The two mutually exclusive strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Defer the capture investment indefinitely
    Wait,
    /// Build the capture unit now
    Invest,
}

impl Strategy {
    /// Map an exploratory-modelling lever value (0 = wait, 1 = invest)
    ///
    /// Lever values arrive as reals; they are rounded before mapping.
    ///
    /// # Example
    /// ```
    /// use beccs_rdm_core::Strategy;
    ///
    /// assert_eq!(Strategy::from_decision(1.0).unwrap(), Strategy::Invest);
    /// assert_eq!(Strategy::from_decision(0.0).unwrap(), Strategy::Wait);
    /// assert!(Strategy::from_decision(2.0).is_err());
    /// ```
    pub fn from_decision(decision: f64) -> Result<Self, ModelError> {
        let rounded = decision.round();
        if rounded == 0.0 {
            Ok(Strategy::Wait)
        } else if rounded == 1.0 {
            Ok(Strategy::Invest)
        } else {
            Err(ModelError::InvalidWorldState(format!(
                "investment decision must be 0 or 1, got {}",
                decision
            )))
        }
    }

    /// Lever value of this strategy
    pub fn decision(&self) -> u8 {
        match self {
            Strategy::Wait => 0,
            Strategy::Invest => 1,
        }
    }

    /// The other strategy
    pub fn alternative(&self) -> Self {
        match self {
            Strategy::Wait => Strategy::Invest,
            Strategy::Invest => Strategy::Wait,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Invest
    }
}

/// Price levels and volatilities of the commodity markets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceAssumptions {
    /// Mean electricity price [EUR/MWh]
    pub electricity_mean: f64,
    /// Electricity volatility, as a fraction of the mean
    pub electricity_volatility: f64,
    /// Mean district heat price [EUR/MWh]
    pub heat_mean: f64,
    pub heat_volatility: f64,
    /// Mean voluntary carbon-removal credit price [EUR/tCO2]
    pub credit_mean: f64,
    pub credit_volatility: f64,
    /// Biomass fuel price [EUR/MWh]
    pub biomass_price: f64,
    /// Emissions-allowance price reached in 2050 [EUR/tCO2]
    pub allowance_2050: f64,
    /// Multiplicative noise on the allowance path
    pub allowance_volatility: f64,
}

impl Default for PriceAssumptions {
    fn default() -> Self {
        Self {
            electricity_mean: 50.0,
            electricity_volatility: 0.4,
            heat_mean: 50.0,
            heat_volatility: 0.2,
            credit_mean: 30.0,
            credit_volatility: 0.4,
            biomass_price: 25.0,
            allowance_2050: 200.0,
            allowance_volatility: 0.1,
        }
    }
}

/// Which price-path formulation generates the trajectories
///
/// The two formulations are alternatives; an evaluation uses exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceModel {
    /// Independent bounded draw around the mean each year, with an
    /// optional one-year energy price spike
    BoundedDraw,
    /// Beta-driven additive random walk reflected at a roof and a floor.
    /// Trends lie in [-1, 1]; higher values make increases more likely.
    BetaWalk {
        electricity_trend: f64,
        heat_trend: f64,
        credit_trend: f64,
        allowance_trend: f64,
    },
}

impl Default for PriceModel {
    fn default() -> Self {
        PriceModel::BoundedDraw
    }
}

/// Financial parameters of the capture investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Financials {
    pub discount_rate: f64,
    /// Capital expenditure, spent evenly over the construction years [EUR]
    pub capex: f64,
    /// Fixed OPEX of the capture unit [EUR/yr]
    pub capture_fixed_opex: f64,
    /// Variable OPEX of capture [EUR/tCO2]
    pub variable_opex: f64,
    /// [EUR/tCO2]
    pub transport_cost: f64,
    /// [EUR/tCO2]
    pub storage_cost: f64,
    /// Yearly fractional decline of the specific cost with operating experience
    pub learning_rate: f64,
}

impl Default for Financials {
    fn default() -> Self {
        Self {
            discount_rate: 0.06,
            capex: 200e6,
            capture_fixed_opex: 20e6,
            variable_opex: 44.0,
            transport_cost: 22.0,
            storage_cost: 14.5,
            learning_rate: 0.01,
        }
    }
}

/// Policy threshold years and auction support
///
/// Threshold years are sampled as reals; a calendar year `y` is compared
/// against them as `y as f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyRegime {
    /// From this year a quota obligation guarantees at least cost recovery
    pub quota_year: f64,
    /// From this year removals trade at allowance-price level
    pub eu_integration_year: f64,
    /// From this year biomass combustion is restricted and emissions need allowances
    pub biomass_ban_year: f64,
    /// Credits can only be claimed and sold in years strictly after this one
    pub claim_year: f64,
    /// Year of a one-off energy price spike, if any
    pub shock_year: Option<f64>,
    /// Share of the specific cost covered by reversed auctions until 2040
    pub auction_coverage: f64,
}

impl Default for PolicyRegime {
    fn default() -> Self {
        Self {
            quota_year: 2035.0,
            eu_integration_year: 2040.0,
            biomass_ban_year: 2051.0,
            claim_year: 2026.0,
            shock_year: None,
            auction_coverage: 0.5,
        }
    }
}

impl PolicyRegime {
    pub fn quota_active(&self, year: f64) -> bool {
        year >= self.quota_year
    }

    pub fn eu_integration_active(&self, year: f64) -> bool {
        year >= self.eu_integration_year
    }

    pub fn biomass_ban_active(&self, year: f64) -> bool {
        year >= self.biomass_ban_year
    }

    /// Whether credits may be sold in `year`
    ///
    /// Evaluated as a disjunction of the two closing conditions, so it stays
    /// well defined when the claim year is not before the ban year.
    pub fn credits_saleable(&self, year: f64) -> bool {
        !(self.biomass_ban_active(year) || year <= self.claim_year)
    }
}

/// One state of the world: every input of a single evaluation
///
/// # Example
/// ```
/// use beccs_rdm_core::{Strategy, WorldState};
///
/// let world: WorldState = serde_json::from_str(
///     r#"{ "strategy": "wait", "policy": { "claim_year": 2030.0 } }"#,
/// ).unwrap();
/// assert_eq!(world.strategy, Strategy::Wait);
/// assert_eq!(world.policy.claim_year, 2030.0);
/// assert_eq!(world.financials.discount_rate, 0.06);
/// assert!(world.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldState {
    pub strategy: Strategy,
    pub prices: PriceAssumptions,
    pub price_model: PriceModel,
    /// Fraction of the year the plant runs, in (0, 1]
    pub availability_factor: f64,
    pub financials: Financials,
    pub policy: PolicyRegime,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            prices: PriceAssumptions::default(),
            price_model: PriceModel::default(),
            availability_factor: 0.7,
            financials: Financials::default(),
            policy: PolicyRegime::default(),
        }
    }
}

impl WorldState {
    /// Reference case with the given strategy
    pub fn reference(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Range-check every parameter
    ///
    /// The valuation itself assumes validated input; drivers call this
    /// once per SOW before evaluation.
    pub fn validate(&self) -> Result<(), ModelError> {
        let finite = [
            ("prices.electricity_mean", self.prices.electricity_mean),
            ("prices.heat_mean", self.prices.heat_mean),
            ("prices.credit_mean", self.prices.credit_mean),
            ("prices.biomass_price", self.prices.biomass_price),
            ("prices.allowance_2050", self.prices.allowance_2050),
            ("financials.capex", self.financials.capex),
            ("financials.capture_fixed_opex", self.financials.capture_fixed_opex),
            ("financials.variable_opex", self.financials.variable_opex),
            ("financials.transport_cost", self.financials.transport_cost),
            ("financials.storage_cost", self.financials.storage_cost),
            ("financials.learning_rate", self.financials.learning_rate),
            ("policy.quota_year", self.policy.quota_year),
            ("policy.eu_integration_year", self.policy.eu_integration_year),
            ("policy.biomass_ban_year", self.policy.biomass_ban_year),
            ("policy.claim_year", self.policy.claim_year),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        let non_negative = [
            ("prices.electricity_mean", self.prices.electricity_mean),
            ("prices.heat_mean", self.prices.heat_mean),
            ("prices.credit_mean", self.prices.credit_mean),
            ("prices.biomass_price", self.prices.biomass_price),
            ("prices.allowance_2050", self.prices.allowance_2050),
            ("financials.capex", self.financials.capex),
            ("financials.capture_fixed_opex", self.financials.capture_fixed_opex),
            ("financials.learning_rate", self.financials.learning_rate),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(invalid(format!("{} must be non-negative, got {}", name, value)));
            }
        }

        let unit_interval = [
            ("prices.electricity_volatility", self.prices.electricity_volatility),
            ("prices.heat_volatility", self.prices.heat_volatility),
            ("prices.credit_volatility", self.prices.credit_volatility),
            ("prices.allowance_volatility", self.prices.allowance_volatility),
            ("policy.auction_coverage", self.policy.auction_coverage),
        ];
        for (name, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{} must be in [0, 1], got {}", name, value)));
            }
        }

        if !(self.availability_factor > 0.0 && self.availability_factor <= 1.0) {
            return Err(invalid(format!(
                "availability_factor must be in (0, 1], got {}",
                self.availability_factor
            )));
        }

        let rate = self.financials.discount_rate;
        if !(rate.is_finite() && rate > -1.0) {
            return Err(invalid(format!("discount_rate must be > -1, got {}", rate)));
        }

        if let Some(shock_year) = self.policy.shock_year {
            if !shock_year.is_finite() {
                return Err(invalid(format!("policy.shock_year must be finite, got {}", shock_year)));
            }
        }

        if let PriceModel::BetaWalk {
            electricity_trend,
            heat_trend,
            credit_trend,
            allowance_trend,
        } = &self.price_model
        {
            let trends = [
                ("electricity_trend", *electricity_trend),
                ("heat_trend", *heat_trend),
                ("credit_trend", *credit_trend),
                ("allowance_trend", *allowance_trend),
            ];
            for (name, value) in trends {
                if !(-1.0..=1.0).contains(&value) {
                    return Err(invalid(format!(
                        "price_model.{} must be in [-1, 1], got {}",
                        name, value
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(msg: String) -> ModelError {
    ModelError::InvalidWorldState(msg)
}
