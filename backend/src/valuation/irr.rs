//! Internal rate of return by bracketing and bisection
//!
//! The NPV polynomial is scanned over a grid of rates to find every sign
//! change, each bracket is refined by bisection, and the real root closest
//! to zero is returned. No sign change means no real root: the IRR is then
//! defined as 0.

use tracing::warn;

use super::net_present_value;

/// Lowest rate searched
pub const IRR_RATE_FLOOR: f64 = -0.99;

/// Highest rate searched
pub const IRR_RATE_CEILING: f64 = 10.0;

const GRID_STEPS: usize = 2000;
const MAX_BISECTIONS: usize = 200;
const TOLERANCE: f64 = 1e-12;

/// IRR of `cash_flows`, or 0 when the series has no real root in range
///
/// # Example
/// ```
/// use beccs_rdm_core::valuation::internal_rate_of_return;
///
/// let irr = internal_rate_of_return(&[-100.0, 110.0]);
/// assert!((irr - 0.10).abs() < 1e-9);
///
/// // All-negative flows never break even
/// assert_eq!(internal_rate_of_return(&[-100.0, -10.0]), 0.0);
/// ```
pub fn internal_rate_of_return(cash_flows: &[f64]) -> f64 {
    if cash_flows.len() < 2 || cash_flows.iter().any(|cf| !cf.is_finite()) {
        return 0.0;
    }

    let grid = rate_grid();
    let mut best: Option<f64> = None;
    let mut lower = grid[0];
    let mut npv_lower = net_present_value(cash_flows, lower);

    for &upper in &grid[1..] {
        let npv_upper = net_present_value(cash_flows, upper);

        let root = if npv_lower == 0.0 {
            Some(lower)
        } else if npv_lower.signum() != npv_upper.signum() {
            Some(bisect(cash_flows, lower, upper, npv_lower))
        } else {
            None
        };

        if let Some(root) = root {
            best = match best {
                Some(current) if current.abs() <= root.abs() => Some(current),
                _ => Some(root),
            };
        }

        lower = upper;
        npv_lower = npv_upper;
    }

    if npv_lower == 0.0 {
        best = match best {
            Some(current) if current.abs() <= lower.abs() => Some(current),
            _ => Some(lower),
        };
    }

    match best {
        Some(rate) => rate,
        None => {
            warn!("no real IRR root in [{}, {}], reporting 0", IRR_RATE_FLOOR, IRR_RATE_CEILING);
            0.0
        }
    }
}

/// Search grid, dense near zero where project rates usually lie
fn rate_grid() -> Vec<f64> {
    // Quadratic spacing on each side of zero
    let half = GRID_STEPS / 2;
    let mut grid = Vec::with_capacity(GRID_STEPS + 1);
    for i in (1..=half).rev() {
        let s = i as f64 / half as f64;
        grid.push(IRR_RATE_FLOOR * s * s);
    }
    grid.push(0.0);
    for i in 1..=half {
        let s = i as f64 / half as f64;
        grid.push(IRR_RATE_CEILING * s * s);
    }
    grid
}

fn bisect(cash_flows: &[f64], mut lower: f64, mut upper: f64, mut npv_lower: f64) -> f64 {
    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lower + upper);
        let npv_mid = net_present_value(cash_flows, mid);
        if npv_mid == 0.0 || (upper - lower) < TOLERANCE {
            return mid;
        }
        if npv_mid.signum() == npv_lower.signum() {
            lower = mid;
            npv_lower = npv_mid;
        } else {
            upper = mid;
        }
    }
    0.5 * (lower + upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_sorted_and_bounded() {
        let grid = rate_grid();
        assert_eq!(grid.first().copied(), Some(IRR_RATE_FLOOR));
        assert_eq!(grid.last().copied(), Some(IRR_RATE_CEILING));
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_two_roots_picks_closest_to_zero() {
        // -1 + 2.3 v - 1.32 v^2 with v = 1 / (1 + r) has roots r = 0.1, 0.2
        let flows = [-1.0, 2.3, -1.32];
        let irr = internal_rate_of_return(&flows);
        assert!((irr - 0.1).abs() < 1e-8, "irr = {}", irr);
    }

    #[test]
    fn test_non_finite_flows_give_zero() {
        assert_eq!(internal_rate_of_return(&[-1.0, f64::NAN]), 0.0);
    }
}
