//! Tests for NPV, IRR and regret

use beccs_rdm_core::valuation::{internal_rate_of_return, net_present_value};
use beccs_rdm_core::{regret, Strategy};

#[test]
fn test_npv_year_zero_is_undiscounted() {
    assert_eq!(net_present_value(&[250.0], 0.06), 250.0);
}

#[test]
fn test_npv_at_zero_rate_is_sum() {
    let flows = [-100.0, 30.0, 40.0, 50.0];
    assert!((net_present_value(&flows, 0.0) - 20.0).abs() < 1e-12);
}

#[test]
fn test_npv_discounts_each_year() {
    let npv = net_present_value(&[0.0, 106.0, 112.36], 0.06);
    assert!((npv - 200.0).abs() < 1e-9);
}

#[test]
fn test_npv_of_empty_series_is_zero() {
    assert_eq!(net_present_value(&[], 0.06), 0.0);
}

#[test]
fn test_irr_zeroes_npv() {
    let flows = [-200e6, -10e6, 30e6, 30e6, 30e6, 30e6, 30e6, 30e6, 30e6, 30e6, 30e6, 30e6];
    let irr = internal_rate_of_return(&flows);

    assert!(irr > 0.0);
    assert!(net_present_value(&flows, irr).abs() < 1.0);
}

#[test]
fn test_irr_of_two_period_investment() {
    let irr = internal_rate_of_return(&[-100.0, 0.0, 121.0]);
    assert!((irr - 0.10).abs() < 1e-9);
}

#[test]
fn test_irr_negative_root() {
    // Half the money back after one year
    let irr = internal_rate_of_return(&[-100.0, 50.0]);
    assert!((irr + 0.5).abs() < 1e-9);
}

#[test]
fn test_irr_without_sign_change_is_zero() {
    assert_eq!(internal_rate_of_return(&[10.0, 20.0, 30.0]), 0.0);
    assert_eq!(internal_rate_of_return(&[-10.0, -20.0]), 0.0);
}

#[test]
fn test_irr_degenerate_inputs_are_zero() {
    assert_eq!(internal_rate_of_return(&[]), 0.0);
    assert_eq!(internal_rate_of_return(&[-5.0]), 0.0);
    assert_eq!(internal_rate_of_return(&[-5.0, f64::NAN]), 0.0);
}

#[test]
fn test_regret_is_gap_to_best() {
    assert_eq!(regret(300.0, 100.0, Strategy::Invest), 0.0);
    assert_eq!(regret(300.0, 100.0, Strategy::Wait), 200.0);
    assert_eq!(regret(-300.0, 100.0, Strategy::Invest), 400.0);
    assert_eq!(regret(-300.0, 100.0, Strategy::Wait), 0.0);
}

#[test]
fn test_exactly_one_strategy_is_regret_free_unless_tied() {
    let (invest, wait) = (12.5, 12.0);
    let free = [Strategy::Wait, Strategy::Invest]
        .iter()
        .filter(|s| regret(invest, wait, **s) == 0.0)
        .count();
    assert_eq!(free, 1);

    assert_eq!(regret(7.0, 7.0, Strategy::Wait), 0.0);
    assert_eq!(regret(7.0, 7.0, Strategy::Invest), 0.0);
}
