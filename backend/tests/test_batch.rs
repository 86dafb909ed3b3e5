//! Tests for batch evaluation and the robustness summary

use beccs_rdm_core::orchestrator::{compute_config_hash, validate_worlds};
use beccs_rdm_core::{
    run_batch, BatchConfig, Evaluator, ExecutionMode, ModelError, PlantDesign, RobustnessSummary,
    Strategy, WorldState,
};

fn population(n: usize) -> Vec<WorldState> {
    (0..n)
        .map(|i| {
            let strategy = if i % 2 == 0 { Strategy::Invest } else { Strategy::Wait };
            let mut world = WorldState::reference(strategy);
            world.prices.credit_mean = 10.0 + 15.0 * i as f64;
            world.policy.claim_year = 2026.0 + (i % 5) as f64;
            world
        })
        .collect()
}

#[test]
fn test_parallel_matches_sequential() {
    let worlds = population(32);
    let parallel = BatchConfig::with_seed(2024);
    let sequential = BatchConfig {
        mode: ExecutionMode::Sequential,
        ..BatchConfig::with_seed(2024)
    };

    let a = run_batch(&worlds, &parallel).unwrap();
    let b = run_batch(&worlds, &sequential).unwrap();

    assert_eq!(a.results, b.results);
    assert_eq!(a.robustness, b.robustness);
    assert_eq!(a.config_hash, b.config_hash);
}

#[test]
fn test_batch_results_match_single_evaluations() {
    let worlds = population(6);
    let report = run_batch(&worlds, &BatchConfig::with_seed(11)).unwrap();
    let evaluator = Evaluator::reference();

    for (index, world) in worlds.iter().enumerate() {
        assert_eq!(report.results[index], evaluator.evaluate_sow(world, 11, index as u64));
    }
}

#[test]
fn test_rerun_reproduces_everything_but_run_id() {
    let worlds = population(8);
    let config = BatchConfig::with_seed(5);

    let a = run_batch(&worlds, &config).unwrap();
    let b = run_batch(&worlds, &config).unwrap();

    assert_eq!(a.results, b.results);
    assert_eq!(a.config_hash, b.config_hash);
    assert_ne!(a.run_id, b.run_id);
}

#[test]
fn test_config_hash_tracks_inputs() {
    let worlds = population(4);

    let base = run_batch(&worlds, &BatchConfig::with_seed(1)).unwrap();
    let other_seed = run_batch(&worlds, &BatchConfig::with_seed(2)).unwrap();
    let other_worlds = run_batch(&population(5), &BatchConfig::with_seed(1)).unwrap();

    assert_eq!(base.config_hash.len(), 64);
    assert_ne!(base.config_hash, other_seed.config_hash);
    assert_ne!(base.config_hash, other_worlds.config_hash);
}

#[test]
fn test_config_hash_is_stable() {
    let world = WorldState::default();
    assert_eq!(
        compute_config_hash(&world).unwrap(),
        compute_config_hash(&world.clone()).unwrap()
    );
}

#[test]
fn test_invalid_sow_is_reported_by_index() {
    let mut worlds = population(3);
    worlds[1].availability_factor = 0.0;

    match run_batch(&worlds, &BatchConfig::with_seed(1)) {
        Err(ModelError::InvalidWorldState(msg)) => {
            assert!(msg.starts_with("SOW 1:"), "{}", msg);
            assert!(msg.contains("availability_factor"));
        }
        other => panic!("expected InvalidWorldState, got {:?}", other.map(|r| r.results.len())),
    }
}

#[test]
fn test_invalid_plant_is_rejected() {
    let config = BatchConfig {
        design: PlantDesign {
            capture_rate: -0.1,
            ..PlantDesign::reference()
        },
        ..BatchConfig::with_seed(1)
    };

    let err = run_batch(&population(2), &config).unwrap_err();
    assert!(matches!(err, ModelError::InvalidPlant(_)));
}

#[test]
fn test_validate_worlds_accepts_population() {
    assert!(validate_worlds(&population(10)).is_ok());
    assert!(validate_worlds(&[]).is_ok());
}

#[test]
fn test_empty_batch() {
    let report = run_batch(&[], &BatchConfig::with_seed(1)).unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.robustness, RobustnessSummary::default());
}

#[test]
fn test_robustness_summary_counts() {
    let report = run_batch(&population(20), &BatchConfig::with_seed(77)).unwrap();
    let summary = &report.robustness;

    assert_eq!(summary.sows, 20);
    assert!(summary.invest_relative_satisficing <= summary.invest_satisficing);
    assert!(summary.wait_relative_satisficing <= summary.wait_satisficing);
    assert!(summary.invest_max_regret >= 0.0);
    assert!(summary.wait_max_regret >= 0.0);

    let regret_free = report.results.iter().filter(|r| r.regret == 0.0).count();
    assert_eq!(summary.regret_free, regret_free);

    let worst_invest = report
        .results
        .iter()
        .map(|r| (r.npv_wait - r.npv_invest).max(0.0))
        .fold(0.0, f64::max);
    assert_eq!(summary.invest_max_regret, worst_invest);
}

#[test]
fn test_min_max_regret_strategy() {
    let summary = RobustnessSummary {
        invest_max_regret: 5.0,
        wait_max_regret: 9.0,
        ..RobustnessSummary::default()
    };
    assert_eq!(summary.min_max_regret_strategy(), Strategy::Invest);

    let tied = RobustnessSummary::default();
    assert_eq!(tied.min_max_regret_strategy(), Strategy::Wait);
}

#[test]
fn test_report_serializes() {
    let report = run_batch(&population(2), &BatchConfig::with_seed(3)).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"config_hash\""));
    assert!(json.contains("\"robustness\""));
}
