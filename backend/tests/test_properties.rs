//! Property-based tests for the valuation invariants

use proptest::prelude::*;

use beccs_rdm_core::prices::{PriceTrajectoryGenerator, CREDIT_FLOOR, ELECTRICITY_FLOOR, HEAT_FLOOR};
use beccs_rdm_core::valuation::{internal_rate_of_return, net_present_value};
use beccs_rdm_core::Strategy as Decision;
use beccs_rdm_core::{regret, Evaluator, Plant, PlantDesign, RngManager, WorldState};

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![Just(Decision::Wait), Just(Decision::Invest)]
}

prop_compose! {
    fn arb_world()(
        decision in arb_decision(),
        prices in (
            0.0f64..200.0,
            0.0f64..=1.0,
            0.0f64..150.0,
            0.0f64..=1.0,
            0.0f64..300.0,
            0.0f64..=1.0,
            0.0f64..400.0,
        ),
        policy in (
            2024.0f64..2060.0,
            2024.0f64..2060.0,
            2024.0f64..2060.0,
            2020.0f64..2060.0,
            0.0f64..=1.0,
            proptest::option::of(2024.0f64..2050.0),
        ),
        availability_factor in 0.05f64..=1.0,
        discount_rate in 0.0f64..0.15,
    ) -> WorldState {
        let mut world = WorldState::reference(decision);
        (
            world.prices.electricity_mean,
            world.prices.electricity_volatility,
            world.prices.heat_mean,
            world.prices.heat_volatility,
            world.prices.credit_mean,
            world.prices.credit_volatility,
            world.prices.allowance_2050,
        ) = prices;
        (
            world.policy.quota_year,
            world.policy.eu_integration_year,
            world.policy.biomass_ban_year,
            world.policy.claim_year,
            world.policy.auction_coverage,
            world.policy.shock_year,
        ) = policy;
        world.availability_factor = availability_factor;
        world.financials.discount_rate = discount_rate;
        world
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generated_worlds_validate(world in arb_world()) {
        prop_assert!(world.validate().is_ok());
    }

    #[test]
    fn prop_regret_is_never_negative(world in arb_world(), seed in any::<u64>(), index in 0u64..1000) {
        let result = Evaluator::reference().evaluate_sow(&world, seed, index);
        prop_assert!(result.regret >= 0.0);
        prop_assert!(result.npv_invest.is_finite());
        prop_assert!(result.npv_wait.is_finite());
    }

    #[test]
    fn prop_evaluation_is_reproducible(world in arb_world(), seed in any::<u64>(), index in 0u64..1000) {
        let evaluator = Evaluator::reference();
        prop_assert_eq!(
            evaluator.evaluate_sow(&world, seed, index),
            evaluator.evaluate_sow(&world, seed, index)
        );
    }

    #[test]
    fn prop_construction_years_differ_by_capex(world in arb_world(), seed in any::<u64>()) {
        let result = Evaluator::reference().evaluate_sow(&world, seed, 0);
        let plant = Plant::new(&PlantDesign::reference(), world.availability_factor);

        // Waiting additionally owes allowances in construction years under a ban
        let allowances: f64 = (0..2)
            .filter(|t| world.policy.biomass_ban_active((2024 + t) as f64))
            .map(|t| plant.co2_captured() * result.allowance[t])
            .sum();
        let gap = (result.wait_cash_flows[0] - result.invest_cash_flows[0])
            + (result.wait_cash_flows[1] - result.invest_cash_flows[1]);
        let expected = world.financials.capex - allowances;

        let scale = world.financials.capex
            + allowances.abs()
            + result.wait_cash_flows[0].abs()
            + result.wait_cash_flows[1].abs();
        prop_assert!((gap - expected).abs() <= 1e-9 * scale);
    }

    #[test]
    fn prop_floors_hold(world in arb_world(), seed in any::<u64>()) {
        let mut rng = RngManager::new(seed);
        let prices = PriceTrajectoryGenerator::new().generate_market_prices(&world, &mut rng);
        prop_assert!(prices.electricity.min() >= ELECTRICITY_FLOOR);
        prop_assert!(prices.heat.min() >= HEAT_FLOOR);
        prop_assert!(prices.credit.min() >= CREDIT_FLOOR);
    }

    #[test]
    fn prop_supported_price_zero_when_unsaleable(world in arb_world(), seed in any::<u64>()) {
        let result = Evaluator::reference().evaluate_sow(&world, seed, 0);
        for t in 2..27 {
            let year = (2024 + t) as f64;
            if !world.policy.credits_saleable(year) {
                prop_assert_eq!(result.supported_credit_price[t], 0.0);
            }
        }
    }

    #[test]
    fn prop_regret_matches_definition(
        npv_invest in -1e9f64..1e9,
        npv_wait in -1e9f64..1e9,
        chosen in arb_decision(),
    ) {
        let r = regret(npv_invest, npv_wait, chosen);
        prop_assert!(r >= 0.0);
        let chosen_npv = match chosen {
            Decision::Wait => npv_wait,
            Decision::Invest => npv_invest,
        };
        prop_assert_eq!(r == 0.0, chosen_npv >= npv_invest.max(npv_wait));
    }

    #[test]
    fn prop_irr_brackets_npv_sign_change(
        outlay in 1.0f64..1e6,
        inflows in proptest::collection::vec(0.0f64..1e6, 2..27),
    ) {
        // One outlay followed by inflows: NPV falls monotonically in the rate
        let mut flows = vec![-outlay];
        flows.extend(inflows);
        let irr = internal_rate_of_return(&flows);
        if irr != 0.0 {
            prop_assert!(net_present_value(&flows, irr - 1e-6) >= 0.0);
            prop_assert!(net_present_value(&flows, irr + 1e-6) <= 0.0);
        }
    }
}
