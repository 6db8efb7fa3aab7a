use mc_portfolio_shared::{Result, SimulationResult};
use serde::Serialize;

use crate::stats::{self, round_to_cents};

pub const MEAN_LABEL: &str = "Mean Final Value";
pub const MEDIAN_LABEL: &str = "Median Final Value";
pub const BEST_LABEL: &str = "Best Case";
pub const WORST_LABEL: &str = "Worst Case";
pub const P5_LABEL: &str = "5th Percentile";
pub const P95_LABEL: &str = "95th Percentile";

pub const P5: f64 = 0.05;
pub const P95: f64 = 0.95;

/// Distribution of terminal values, every field rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "Mean Final Value")]
    pub mean: f64,
    #[serde(rename = "Median Final Value")]
    pub median: f64,
    #[serde(rename = "Best Case")]
    pub best: f64,
    #[serde(rename = "Worst Case")]
    pub worst: f64,
    #[serde(rename = "5th Percentile")]
    pub p5: f64,
    #[serde(rename = "95th Percentile")]
    pub p95: f64,
}

impl Summary {
    /// `(label, value)` pairs in report order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            (MEAN_LABEL, self.mean),
            (MEDIAN_LABEL, self.median),
            (BEST_LABEL, self.best),
            (WORST_LABEL, self.worst),
            (P5_LABEL, self.p5),
            (P95_LABEL, self.p95),
        ]
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }
}

/// Summary statistics for `result`, or `None` when it holds no terminal values.
pub fn summarize(result: &SimulationResult) -> Result<Option<Summary>> {
    let sorted = result.sorted_values();
    let (Some(&worst), Some(&best)) = (sorted.first(), sorted.last()) else {
        return Ok(None);
    };
    let mean = stats::mean(&sorted).unwrap_or(worst);
    let median = stats::median(&sorted).unwrap_or(worst);

    Ok(Some(Summary {
        mean: round_to_cents(mean),
        median: round_to_cents(median),
        best: round_to_cents(best),
        worst: round_to_cents(worst),
        p5: round_to_cents(stats::rank_percentile(&sorted, P5)?),
        p95: round_to_cents(stats::rank_percentile(&sorted, P95)?),
    }))
}

/// Percentage of paths that end strictly below the starting value.
pub fn probability_of_loss(result: &SimulationResult) -> f64 {
    probability_below(result, result.initial_value)
}

/// Percentage of paths that end strictly below `threshold`; `0.0` for an empty result.
pub fn probability_below(result: &SimulationResult, threshold: f64) -> f64 {
    stats::percent_below(result.terminal_values(), threshold)
}

/// Rank percentiles of `result` for each of `fractions`, rounded to cents.
pub fn percentiles(result: &SimulationResult, fractions: &[f64]) -> Result<Vec<(f64, f64)>> {
    let sorted = result.sorted_values();
    fractions
        .iter()
        .map(|&fraction| {
            let value = stats::rank_percentile(&sorted, fraction)?;
            Ok((fraction, round_to_cents(value)))
        })
        .collect()
}
