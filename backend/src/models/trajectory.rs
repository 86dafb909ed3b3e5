//! Annual price trajectories over the modelling horizon

use serde::{Deserialize, Serialize};

use crate::core::horizon::HORIZON_YEARS;

/// One price per modelled year, index 0 = 2024
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTrajectory([f64; HORIZON_YEARS]);

impl PriceTrajectory {
    pub fn new(values: [f64; HORIZON_YEARS]) -> Self {
        Self(values)
    }

    /// A trajectory at the same price every year
    pub fn constant(price: f64) -> Self {
        Self([price; HORIZON_YEARS])
    }

    /// Price in year index `t`
    ///
    /// # Panics
    /// Panics if `t` is outside the horizon
    pub fn at(&self, t: usize) -> f64 {
        self.0[t]
    }

    pub fn values(&self) -> &[f64; HORIZON_YEARS] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / HORIZON_YEARS as f64
    }

    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Price in the final modelled year (2050)
    pub fn last(&self) -> f64 {
        self.0[HORIZON_YEARS - 1]
    }
}

impl From<[f64; HORIZON_YEARS]> for PriceTrajectory {
    fn from(values: [f64; HORIZON_YEARS]) -> Self {
        Self(values)
    }
}

/// The four price paths of one SOW
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrices {
    pub electricity: PriceTrajectory,
    pub heat: PriceTrajectory,
    /// Voluntary-market carbon-removal credit price
    pub credit: PriceTrajectory,
    /// Emissions-allowance price
    pub allowance: PriceTrajectory,
    /// Biomass fuel price, constant over the horizon
    pub biomass: f64,
}
