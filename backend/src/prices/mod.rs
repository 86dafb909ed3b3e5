//! Price trajectory generation
//!
//! Builds the four annual price paths of one SOW: electricity, heat,
//! voluntary carbon-removal credits and emissions allowances. All draws
//! come from the SOW's own `RngManager`, in a fixed order:
//! electricity, heat, credit, allowance.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same stream state + same inputs → same trajectories
//! 2. **Floors**: every element of a floored trajectory is >= its floor
//! 3. **One formulation per evaluation**: bounded draws and the Beta walk
//!    are alternatives selected by `PriceModel`, never mixed
//!
//! # Example
//!
//! ```
//! use beccs_rdm_core::prices::PriceTrajectoryGenerator;
//! use beccs_rdm_core::RngManager;
//!
//! let generator = PriceTrajectoryGenerator::new();
//! let mut rng = RngManager::new(42);
//! let path = generator.generate_bounded_series(50.0, 0.4, 5.0, Some(2030.0), &mut rng);
//! assert!(path.iter().all(|p| *p >= 5.0));
//! ```

mod beta_walk;
mod bounded;

pub use beta_walk::{WalkBounds, CREDIT_WALK, ELECTRICITY_WALK, HEAT_WALK};

use crate::core::horizon::Horizon;
use crate::models::{MarketPrices, PriceModel, PriceTrajectory, WorldState};
use crate::rng::RngManager;

/// Lowest electricity price a bounded draw can produce [EUR/MWh]
pub const ELECTRICITY_FLOOR: f64 = 5.0;

/// Lowest heat price a bounded draw can produce [EUR/MWh]
pub const HEAT_FLOOR: f64 = 48.0;

/// Lowest voluntary credit price a bounded draw can produce [EUR/tCO2]
pub const CREDIT_FLOOR: f64 = 3.0;

/// Scaling applied to energy prices in the shock year
pub const SHOCK_MULTIPLIER: f64 = 1.85;

/// Known near-term allowance price anchoring the first modelled year [EUR/tCO2]
pub const ALLOWANCE_REFERENCE_PRICE: f64 = 100.0;

/// Generator for the annual price paths of one SOW
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceTrajectoryGenerator {
    horizon: Horizon,
}

impl PriceTrajectoryGenerator {
    pub fn new() -> Self {
        Self {
            horizon: Horizon::standard(),
        }
    }

    /// Generate all four price paths for `world`
    pub fn generate_market_prices(&self, world: &WorldState, rng: &mut RngManager) -> MarketPrices {
        let prices = &world.prices;
        match &world.price_model {
            PriceModel::BoundedDraw => {
                let shock_year = world.policy.shock_year;
                let electricity = self.generate_bounded_series(
                    prices.electricity_mean,
                    prices.electricity_volatility,
                    ELECTRICITY_FLOOR,
                    shock_year,
                    rng,
                );
                let heat = self.generate_bounded_series(
                    prices.heat_mean,
                    prices.heat_volatility,
                    HEAT_FLOOR,
                    shock_year,
                    rng,
                );
                let credit = self.generate_bounded_series(
                    prices.credit_mean,
                    prices.credit_volatility,
                    CREDIT_FLOOR,
                    None,
                    rng,
                );
                let allowance = self.generate_allowance_series(
                    prices.allowance_2050,
                    prices.allowance_volatility,
                    rng,
                );
                MarketPrices {
                    electricity,
                    heat,
                    credit,
                    allowance,
                    biomass: prices.biomass_price,
                }
            }
            PriceModel::BetaWalk {
                electricity_trend,
                heat_trend,
                credit_trend,
                allowance_trend,
            } => {
                let electricity = beta_walk::energy_walk(
                    prices.electricity_mean,
                    *electricity_trend,
                    &ELECTRICITY_WALK,
                    rng,
                );
                let heat = beta_walk::energy_walk(prices.heat_mean, *heat_trend, &HEAT_WALK, rng);
                let credit =
                    beta_walk::credit_walk(prices.credit_mean, *credit_trend, &CREDIT_WALK, rng);
                let allowance =
                    beta_walk::allowance_growth(ALLOWANCE_REFERENCE_PRICE, *allowance_trend, rng);
                MarketPrices {
                    electricity,
                    heat,
                    credit,
                    allowance,
                    biomass: prices.biomass_price,
                }
            }
        }
    }

    /// Independent bounded draw around `mean` for every year
    ///
    /// Each year's price is `mean × (1 + u)` with `u ~ U[-volatility, +volatility]`,
    /// clamped below to `floor`. In the calendar year equal to the rounded
    /// `shock_year` the clamped price is scaled by [`SHOCK_MULTIPLIER`].
    pub fn generate_bounded_series(
        &self,
        mean: f64,
        volatility: f64,
        floor: f64,
        shock_year: Option<f64>,
        rng: &mut RngManager,
    ) -> PriceTrajectory {
        bounded::bounded_series(&self.horizon, mean, volatility, floor, shock_year, rng)
    }

    /// Allowance path from the reference price to `long_horizon_price` in 2050
    ///
    /// The first year sits at [`ALLOWANCE_REFERENCE_PRICE`]; every later year
    /// is the linear interpolation scaled by `1 + u`, `u ~ U[-volatility, +volatility]`.
    pub fn generate_allowance_series(
        &self,
        long_horizon_price: f64,
        volatility: f64,
        rng: &mut RngManager,
    ) -> PriceTrajectory {
        bounded::allowance_series(
            &self.horizon,
            ALLOWANCE_REFERENCE_PRICE,
            long_horizon_price,
            volatility,
            rng,
        )
    }
}
