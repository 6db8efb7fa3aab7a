use std::time::Instant;

use mc_portfolio_shared::config::SimulationParameters;
use mc_portfolio_shared::result::SimulationResult;
use mc_portfolio_shared::Result;

use crate::return_process::{NormalReturns, ReturnSource};

/// Compound `initial_value` over `period_count` draws from `source`.
///
/// No floor is applied: a draw at or below -100% takes the value to zero or
/// below and later periods keep compounding from there.
#[inline]
pub fn simulate_path<R: ReturnSource>(
    initial_value: f64,
    period_count: usize,
    source: &mut R,
) -> f64 {
    let mut value = initial_value;
    for _ in 0..period_count {
        let r = source.next_return();
        value *= 1.0 + r;
    }
    value
}

/// Generate `params.path_count` independent paths without validating `params`.
///
/// Zero counts produce an empty result or untouched initial values.
pub fn simulate<R: ReturnSource>(params: &SimulationParameters, source: &mut R) -> SimulationResult {
    let start = Instant::now();
    tracing::debug!(
        paths = params.path_count,
        periods = params.period_count,
        seed = ?source.seed(),
        "Starting simulation"
    );

    let terminal_values: Vec<f64> = (0..params.path_count)
        .map(|_| simulate_path(params.initial_value, params.period_count, source))
        .collect();

    tracing::debug!(
        paths = terminal_values.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Simulation finished"
    );

    SimulationResult::from_values(params.initial_value, terminal_values).with_seed(source.seed())
}

/// Owns validated parameters and the random source that drives them.
///
/// Every call to [`SimulationEngine::run`] returns a fresh result; nothing from
/// earlier runs is kept on the engine.
pub struct SimulationEngine<R = NormalReturns> {
    params: SimulationParameters,
    source: R,
}

impl SimulationEngine<NormalReturns> {
    /// Engine drawing from an entropy-seeded generator; runs are not reproducible.
    pub fn new(params: SimulationParameters) -> Result<Self> {
        params.validate()?;
        let source = NormalReturns::from_entropy(params.mean_return, params.volatility);
        Ok(Self { params, source })
    }

    pub fn seeded(params: SimulationParameters, seed: u64) -> Result<Self> {
        params.validate()?;
        let source = NormalReturns::new(params.mean_return, params.volatility, seed);
        Ok(Self { params, source })
    }
}

impl<R: ReturnSource> SimulationEngine<R> {
    /// Engine drawing from a caller-supplied source. `mean_return` and
    /// `volatility` are still validated but the source decides the draws.
    pub fn with_source(params: SimulationParameters, source: R) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, source })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn run(&mut self) -> SimulationResult {
        simulate(&self.params, &mut self.source)
    }
}
