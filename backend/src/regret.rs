//! Regret of a strategy choice
//!
//! Regret is the NPV gap between the best strategy in a SOW and the one
//! actually chosen. It is zero exactly when the chosen strategy is also the
//! NPV-maximizing one, and never negative.

use crate::models::Strategy;

/// Regret of choosing `chosen` given both NPVs
///
/// # Example
/// ```
/// use beccs_rdm_core::{regret, Strategy};
///
/// assert_eq!(regret(120.0, 100.0, Strategy::Invest), 0.0);
/// assert_eq!(regret(120.0, 100.0, Strategy::Wait), 20.0);
/// ```
pub fn regret(npv_invest: f64, npv_wait: f64, chosen: Strategy) -> f64 {
    let best = npv_invest.max(npv_wait);
    let chosen_npv = match chosen {
        Strategy::Wait => npv_wait,
        Strategy::Invest => npv_invest,
    };
    best - chosen_npv
}
