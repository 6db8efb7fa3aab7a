use mc_portfolio_shared::config::SimulationParameters;
use mc_portfolio_sim::{percentiles, probability_below, probability_of_loss, summarize, SimulationEngine};

use crate::output::{self, Report};
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn run(
    initial_value: f64,
    periods: usize,
    mean_return: f64,
    volatility: f64,
    paths: usize,
    seed: Option<u64>,
    extra_percentiles: &[f64],
    threshold: Option<f64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let params = SimulationParameters::new(initial_value, periods, mean_return, volatility)
        .with_path_count(paths);
    simulate_and_report(params, seed, extra_percentiles, threshold, format)
}

pub fn simulate_and_report(
    params: SimulationParameters,
    seed: Option<u64>,
    extra_percentiles: &[f64],
    threshold: Option<f64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut engine = match seed {
        Some(seed) => SimulationEngine::seeded(params, seed)?,
        None => SimulationEngine::new(params)?,
    };

    if matches!(format, OutputFormat::Text) {
        println!(
            "Running {} paths ({} periods each)...",
            params.path_count, params.period_count,
        );
    }

    let start = std::time::Instant::now();
    let result = engine.run();
    let elapsed = start.elapsed();

    let report = Report {
        paths: result.path_count(),
        seed: result.seed,
        expected_value: params.expected_terminal_value(),
        summary: summarize(&result)?,
        percentiles: percentiles(&result, extra_percentiles)?,
        threshold: threshold.map(|t| (t, probability_below(&result, t))),
        probability_of_loss: probability_of_loss(&result),
    };

    output::print_report(&report, elapsed, format)
}
