use crate::error::{Result, SimulationError};

// Default path count when the caller does not supply one
pub const DEFAULT_PATH_COUNT: usize = 1_000;

// Demonstration parameters
pub const DEMO_INITIAL_VALUE: f64 = 10_000.0;
pub const DEMO_PERIOD_COUNT: usize = 20;
pub const DEMO_MEAN_RETURN: f64 = 0.07; // 7% per period
pub const DEMO_VOLATILITY: f64 = 0.15; // 15% std dev per period
pub const DEMO_PATH_COUNT: usize = 5_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub initial_value: f64,
    pub period_count: usize,
    pub mean_return: f64,
    pub volatility: f64,
    pub path_count: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::demo().with_path_count(DEFAULT_PATH_COUNT)
    }
}

impl SimulationParameters {
    pub fn new(initial_value: f64, period_count: usize, mean_return: f64, volatility: f64) -> Self {
        Self {
            initial_value,
            period_count,
            mean_return,
            volatility,
            path_count: DEFAULT_PATH_COUNT,
        }
    }

    pub fn demo() -> Self {
        Self {
            initial_value: DEMO_INITIAL_VALUE,
            period_count: DEMO_PERIOD_COUNT,
            mean_return: DEMO_MEAN_RETURN,
            volatility: DEMO_VOLATILITY,
            path_count: DEMO_PATH_COUNT,
        }
    }

    pub fn with_path_count(self, path_count: usize) -> Self {
        Self { path_count, ..self }
    }

    /// Rejects parameter sets that would produce degenerate runs.
    ///
    /// Counts must be non-zero, `initial_value` positive and `volatility`
    /// non-negative. Non-finite reals are rejected as well.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_value.is_finite() || self.initial_value <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "initial_value",
                value: self.initial_value,
                reason: "must be positive and finite",
            });
        }
        if self.period_count == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "period_count",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        if !self.mean_return.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "mean_return",
                value: self.mean_return,
                reason: "must be finite",
            });
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "volatility",
                value: self.volatility,
                reason: "must be non-negative and finite",
            });
        }
        if self.path_count == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "path_count",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Terminal value of a path whose every period returns exactly `mean_return`.
    pub fn expected_terminal_value(&self) -> f64 {
        let mut value = self.initial_value;
        for _ in 0..self.period_count {
            value *= 1.0 + self.mean_return;
        }
        value
    }
}
