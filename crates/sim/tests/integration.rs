use mc_portfolio_shared::config::SimulationParameters;
use mc_portfolio_shared::SimulationError;
use mc_portfolio_sim::{
    probability_of_loss, simulate, summarize, FixedReturns, NormalReturns, SimulationEngine,
};

fn zero_vol_engine(
    initial_value: f64,
    period_count: usize,
    mean_return: f64,
    path_count: usize,
) -> SimulationEngine {
    let params = SimulationParameters::new(initial_value, period_count, mean_return, 0.0)
        .with_path_count(path_count);
    SimulationEngine::seeded(params, 42).unwrap()
}

#[test]
fn test_single_period_gain_scenario() {
    let result = zero_vol_engine(10_000.0, 1, 0.10, 10).run();
    assert_eq!(result.path_count(), 10);
    for &v in result.terminal_values() {
        assert!((v - 11_000.0).abs() < 1e-6, "terminal value: {}", v);
    }
    let summary = summarize(&result).unwrap().unwrap();
    assert_eq!(summary.mean, 11_000.0);
    assert_eq!(probability_of_loss(&result), 0.0);
}

#[test]
fn test_single_period_loss_scenario() {
    let result = zero_vol_engine(10_000.0, 1, -0.50, 10).run();
    for &v in result.terminal_values() {
        assert_eq!(v, 5_000.0);
    }
    assert_eq!(probability_of_loss(&result), 100.0);
}

#[test]
fn test_zero_volatility_collapses_distribution() {
    let params = SimulationParameters::new(2_500.0, 15, 0.04, 0.0).with_path_count(500);
    let expected = params.expected_terminal_value();
    let result = SimulationEngine::new(params).unwrap().run();

    for &v in result.terminal_values() {
        assert!((v - expected).abs() < 1e-6, "{} != {}", v, expected);
    }
    let summary = summarize(&result).unwrap().unwrap();
    for (label, value) in summary.entries() {
        assert!((value - expected).abs() < 0.01, "{}: {} != {}", label, value, expected);
    }
    assert_eq!(probability_of_loss(&result), 0.0);
}

#[test]
fn test_zero_volatility_negative_mean_is_total_loss() {
    let result = zero_vol_engine(1_000.0, 5, -0.02, 50).run();
    assert_eq!(probability_of_loss(&result), 100.0);
}

#[test]
fn test_zero_paths_give_empty_sentinels() {
    let params = SimulationParameters::new(10_000.0, 20, 0.07, 0.15).with_path_count(0);
    let mut source = NormalReturns::new(params.mean_return, params.volatility, 1);
    let result = simulate(&params, &mut source);
    assert!(result.is_empty());
    assert_eq!(summarize(&result).unwrap(), None);
    assert_eq!(probability_of_loss(&result), 0.0);
}

#[test]
fn test_engine_rejects_zero_paths() {
    let params = SimulationParameters::new(10_000.0, 20, 0.07, 0.15).with_path_count(0);
    assert!(matches!(
        SimulationEngine::new(params),
        Err(SimulationError::InvalidParameter { name: "path_count", .. })
    ));
}

#[test]
fn test_fixed_return_sequence_is_reproducible() {
    let params = SimulationParameters::new(1_000.0, 4, 0.0, 0.1).with_path_count(30);
    let returns = vec![0.12, -0.07, 0.03, -0.25, 0.40, 0.01, -0.10];

    let run = || {
        let source = FixedReturns::new(returns.clone()).unwrap();
        let mut engine = SimulationEngine::with_source(params, source).unwrap();
        let result = engine.run();
        (summarize(&result).unwrap(), probability_of_loss(&result))
    };

    let first = run();
    assert!(first.0.is_some());
    for _ in 0..5 {
        assert_eq!(run(), first);
    }
}

#[test]
fn test_percentile_ordering_holds() {
    for (seed, paths) in [(1u64, 20usize), (2, 21), (3, 257), (4, 5_000)] {
        let params = SimulationParameters::demo().with_path_count(paths);
        let result = SimulationEngine::seeded(params, seed).unwrap().run();
        let s = summarize(&result).unwrap().unwrap();
        assert!(s.worst <= s.p5, "seed {}: worst {} > p5 {}", seed, s.worst, s.p5);
        assert!(s.p5 <= s.median, "seed {}: p5 {} > median {}", seed, s.p5, s.median);
        assert!(s.median <= s.p95, "seed {}: median {} > p95 {}", seed, s.median, s.p95);
        assert!(s.p95 <= s.best, "seed {}: p95 {} > best {}", seed, s.p95, s.best);
    }
}

#[test]
fn test_demo_run_is_plausible() {
    let result = SimulationEngine::seeded(SimulationParameters::demo(), 2024)
        .unwrap()
        .run();
    assert_eq!(result.path_count(), 5_000);

    let summary = summarize(&result).unwrap().unwrap();
    // Expected value of the mean path is 10000 * 1.07^20 ~= 38697
    assert!(
        summary.mean > 33_000.0 && summary.mean < 45_000.0,
        "mean: {}",
        summary.mean
    );
    let loss = probability_of_loss(&result);
    assert!(loss > 0.0 && loss < 25.0, "loss probability: {}", loss);
}

#[test]
fn test_extreme_returns_can_go_negative() {
    // -150% then +10% every period: sign flips once and compounding continues
    let params = SimulationParameters::new(100.0, 2, 0.0, 0.0).with_path_count(3);
    let source = FixedReturns::new(vec![-1.5, 0.1]).unwrap();
    let result = SimulationEngine::with_source(params, source).unwrap().run();
    for &v in result.terminal_values() {
        assert!((v + 55.0).abs() < 1e-9, "terminal value: {}", v);
    }
    assert_eq!(probability_of_loss(&result), 100.0);
    let summary = summarize(&result).unwrap().unwrap();
    assert_eq!(summary.worst, -55.0);
}
