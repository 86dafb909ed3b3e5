//! Beta-driven additive random walk
//!
//! Each year the price moves by a step drawn from
//! `[max_decrease, max_increase]`, positioned by a Beta draw whose shape is
//! set by a trend parameter in [-1, 1]. Near the roof the upper end of the
//! step range is cut to the roof; near the floor the lower end is lifted to
//! the floor.

use crate::core::horizon::HORIZON_YEARS;
use crate::models::PriceTrajectory;
use crate::rng::RngManager;

/// Roof, floor and step range of one walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBounds {
    pub floor: f64,
    pub roof: f64,
    pub max_increase: f64,
    pub max_decrease: f64,
}

pub const ELECTRICITY_WALK: WalkBounds = WalkBounds {
    floor: super::ELECTRICITY_FLOOR,
    roof: 200.0,
    max_increase: 40.0,
    max_decrease: -40.0,
};

pub const HEAT_WALK: WalkBounds = WalkBounds {
    floor: super::HEAT_FLOOR,
    roof: 200.0,
    max_increase: 10.0,
    max_decrease: -10.0,
};

pub const CREDIT_WALK: WalkBounds = WalkBounds {
    floor: super::CREDIT_FLOOR,
    roof: 500.0,
    max_increase: 40.0,
    max_decrease: -40.0,
};

/// Step range of the noise on the allowance growth path
const ALLOWANCE_NOISE: f64 = 40.0;

/// Annual allowance growth at trend multiplier 1
const ALLOWANCE_GROWTH: f64 = 0.06;

/// Energy prices: shape parameters span [0.3, 1.7]
pub(super) fn energy_walk(
    start: f64,
    trend: f64,
    bounds: &WalkBounds,
    rng: &mut RngManager,
) -> PriceTrajectory {
    let alpha = lerp(0.3, 1.7, trend);
    let beta = lerp(1.7, 0.3, trend);
    walk(start, alpha, beta, bounds, rng)
}

/// Credit prices: shape parameters span [0.6, 1.4], with alpha weighted up
pub(super) fn credit_walk(
    start: f64,
    trend: f64,
    bounds: &WalkBounds,
    rng: &mut RngManager,
) -> PriceTrajectory {
    let alpha = lerp(0.6, 1.4, trend) * 1.4;
    let beta = lerp(1.4, 0.6, trend);
    walk(start, alpha, beta, bounds, rng)
}

/// Exponential allowance growth with additive uniform noise
pub(super) fn allowance_growth(start: f64, trend: f64, rng: &mut RngManager) -> PriceTrajectory {
    let strength = lerp(0.6, 1.5, trend);
    let mut values = [0.0; HORIZON_YEARS];
    values[0] = start;

    for (t, value) in values.iter_mut().enumerate().skip(1) {
        let noise = rng.uniform(-ALLOWANCE_NOISE, ALLOWANCE_NOISE);
        *value = start * (1.0 + ALLOWANCE_GROWTH * strength).powi(t as i32) + noise;
    }

    PriceTrajectory::new(values)
}

fn walk(start: f64, alpha: f64, beta: f64, bounds: &WalkBounds, rng: &mut RngManager) -> PriceTrajectory {
    let mut values = [0.0; HORIZON_YEARS];
    let mut price = start.max(bounds.floor);

    for value in values.iter_mut() {
        *value = price;
        let scale = rng.beta(alpha, beta);

        let step = if price + bounds.max_increase > bounds.roof {
            bounds.max_decrease + ((bounds.roof - price) - bounds.max_decrease) * scale
        } else if price + bounds.max_decrease < bounds.floor {
            let lowest = bounds.floor - price;
            lowest + (bounds.max_increase - lowest) * scale
        } else {
            bounds.max_decrease + (bounds.max_increase - bounds.max_decrease) * scale
        };
        price = (price + step).max(bounds.floor);
    }

    PriceTrajectory::new(values)
}

/// Map a trend in [-1, 1] linearly onto [at_minus_one, at_plus_one]
fn lerp(at_minus_one: f64, at_plus_one: f64, trend: f64) -> f64 {
    at_minus_one + (at_plus_one - at_minus_one) * (trend + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_stays_between_floor_and_roof() {
        let mut rng = RngManager::new(77);
        for trend in [-1.0, 0.0, 1.0] {
            let path = energy_walk(50.0, trend, &ELECTRICITY_WALK, &mut rng);
            assert!(path.min() >= ELECTRICITY_WALK.floor);
            assert!(path.max() <= ELECTRICITY_WALK.roof + 1e-9);
        }
    }

    #[test]
    fn test_start_below_floor_is_lifted() {
        let mut rng = RngManager::new(77);
        let path = energy_walk(30.0, 0.0, &HEAT_WALK, &mut rng);
        assert_eq!(path.at(0), HEAT_WALK.floor);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.3, 1.7, -1.0), 0.3);
        assert_eq!(lerp(0.3, 1.7, 1.0), 1.7);
    }
}
