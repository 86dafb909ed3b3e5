//! Robustness summary over a batch of SOWs
//!
//! Two criteria are reported for each strategy:
//!
//! - **Satisficing**: NPV > 0 (absolute), and NPV > 0 while also beating
//!   the alternative (relative)
//! - **Savage (min-max regret)**: the largest regret the strategy would
//!   incur across all SOWs

use serde::{Deserialize, Serialize};

use crate::models::{Strategy, ValuationResult};
use crate::regret::regret;

/// Batch-level robustness of both strategies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RobustnessSummary {
    pub sows: usize,
    pub invest_satisficing: usize,
    pub wait_satisficing: usize,
    pub invest_relative_satisficing: usize,
    pub wait_relative_satisficing: usize,
    pub invest_max_regret: f64,
    pub wait_max_regret: f64,
    /// SOWs in which the chosen strategy had zero regret
    pub regret_free: usize,
}

impl RobustnessSummary {
    pub fn from_results(results: &[ValuationResult]) -> Self {
        let mut summary = Self {
            sows: results.len(),
            ..Self::default()
        };

        for result in results {
            let (invest, wait) = (result.npv_invest, result.npv_wait);

            if invest > 0.0 {
                summary.invest_satisficing += 1;
                if invest > wait {
                    summary.invest_relative_satisficing += 1;
                }
            }
            if wait > 0.0 {
                summary.wait_satisficing += 1;
                if wait > invest {
                    summary.wait_relative_satisficing += 1;
                }
            }

            summary.invest_max_regret = summary
                .invest_max_regret
                .max(regret(invest, wait, Strategy::Invest));
            summary.wait_max_regret = summary.wait_max_regret.max(regret(invest, wait, Strategy::Wait));

            if result.is_regret_free() {
                summary.regret_free += 1;
            }
        }

        summary
    }

    /// Strategy with the lower maximum regret (ties go to waiting)
    pub fn min_max_regret_strategy(&self) -> Strategy {
        if self.invest_max_regret < self.wait_max_regret {
            Strategy::Invest
        } else {
            Strategy::Wait
        }
    }
}
