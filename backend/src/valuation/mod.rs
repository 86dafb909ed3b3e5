//! Valuation: discounting and rate of return
//!
//! NPV and IRR are two separate pipelines fed by two different cash-flow
//! series. NPV discounts the full strategy cash flows; IRR is taken from
//! the capital-linked series only.

mod irr;

pub use irr::{internal_rate_of_return, IRR_RATE_CEILING, IRR_RATE_FLOOR};

/// Net present value of an annual series, year 0 undiscounted
///
/// # Example
/// ```
/// use beccs_rdm_core::valuation::net_present_value;
///
/// let npv = net_present_value(&[100.0, 110.0], 0.10);
/// assert!((npv - 200.0).abs() < 1e-9);
/// ```
pub fn net_present_value(cash_flows: &[f64], discount_rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cash_flow)| cash_flow / (1.0 + discount_rate).powi(t as i32))
        .sum()
}
