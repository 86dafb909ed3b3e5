//! Bounded independent draws and the interpolated allowance path

use crate::core::horizon::{Horizon, HORIZON_YEARS};
use crate::models::PriceTrajectory;
use crate::rng::RngManager;

use super::SHOCK_MULTIPLIER;

pub(super) fn bounded_series(
    horizon: &Horizon,
    mean: f64,
    volatility: f64,
    floor: f64,
    shock_year: Option<f64>,
    rng: &mut RngManager,
) -> PriceTrajectory {
    let shock_year = shock_year.map(|year| year.round());
    let mut values = [0.0; HORIZON_YEARS];

    for (t, value) in values.iter_mut().enumerate() {
        let perturbation = rng.uniform(-volatility, volatility);
        let mut price = (mean * (1.0 + perturbation)).max(floor);
        if shock_year == Some(horizon.year_f64(t)) {
            price *= SHOCK_MULTIPLIER;
        }
        *value = price;
    }

    PriceTrajectory::new(values)
}

pub(super) fn allowance_series(
    horizon: &Horizon,
    reference_price: f64,
    long_horizon_price: f64,
    volatility: f64,
    rng: &mut RngManager,
) -> PriceTrajectory {
    let last = (horizon.len() - 1) as f64;
    let mut values = [0.0; HORIZON_YEARS];
    values[0] = reference_price;

    for (t, value) in values.iter_mut().enumerate().skip(1) {
        let interpolated = reference_price + (long_horizon_price - reference_price) * (t as f64 / last);
        let noise = rng.uniform(-volatility, volatility);
        *value = interpolated * (1.0 + noise);
    }

    PriceTrajectory::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_volatility_is_flat_at_mean() {
        let mut rng = RngManager::new(1);
        let path = bounded_series(&Horizon::standard(), 60.0, 0.0, 5.0, None, &mut rng);
        assert!(path.iter().all(|p| *p == 60.0));
    }

    #[test]
    fn test_zero_volatility_allowance_is_linear() {
        let mut rng = RngManager::new(1);
        let path = allowance_series(&Horizon::standard(), 100.0, 230.0, 0.0, &mut rng);
        assert_eq!(path.at(0), 100.0);
        assert!((path.at(13) - 165.0).abs() < 1e-9);
        assert!((path.last() - 230.0).abs() < 1e-9);
    }

    #[test]
    fn test_shock_year_outside_horizon_has_no_effect() {
        let mut rng = RngManager::new(1);
        let path = bounded_series(&Horizon::standard(), 60.0, 0.0, 5.0, Some(2022.0), &mut rng);
        assert_eq!(path.max(), 60.0);
    }
}
