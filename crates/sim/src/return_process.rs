use mc_portfolio_shared::{Result, SimulationError};
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg64;

/// Source of per-period returns consumed by path generation.
pub trait ReturnSource {
    fn next_return(&mut self) -> f64;

    /// Seed that reproduces this source, if it has one.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl<S: ReturnSource + ?Sized> ReturnSource for &mut S {
    #[inline]
    fn next_return(&mut self) -> f64 {
        (**self).next_return()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

/// Independent Normal(mean, volatility) draws.
pub struct NormalReturns {
    mean: f64,
    volatility: f64,
    rng: Pcg64,
    seed: Option<u64>,
}

impl NormalReturns {
    pub fn new(mean: f64, volatility: f64, seed: u64) -> Self {
        Self {
            mean,
            volatility,
            rng: Pcg64::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy(mean: f64, volatility: f64) -> Self {
        Self {
            mean,
            volatility,
            rng: Pcg64::from_entropy(),
            seed: None,
        }
    }
}

impl ReturnSource for NormalReturns {
    #[inline]
    fn next_return(&mut self) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        self.mean + self.volatility * z
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Replays a fixed sequence of returns, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedReturns {
    returns: Vec<f64>,
    cursor: usize,
}

impl FixedReturns {
    pub fn new(returns: Vec<f64>) -> Result<Self> {
        if returns.is_empty() {
            return Err(SimulationError::InvalidParameter {
                name: "returns",
                value: 0.0,
                reason: "fixed return sequence must not be empty",
            });
        }
        Ok(Self { returns, cursor: 0 })
    }

    pub fn constant(r: f64) -> Self {
        Self {
            returns: vec![r],
            cursor: 0,
        }
    }
}

impl ReturnSource for FixedReturns {
    #[inline]
    fn next_return(&mut self) -> f64 {
        let r = self.returns[self.cursor];
        self.cursor = (self.cursor + 1) % self.returns.len();
        r
    }
}
