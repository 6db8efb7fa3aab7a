//! Order statistics over terminal values.
//!
//! Functions taking `sorted` expect values in ascending order, as returned by
//! [`SimulationResult::sorted_values`](mc_portfolio_shared::SimulationResult::sorted_values).

use mc_portfolio_shared::{Result, SimulationError};

/// Round the exact binary value to 2 decimal places, ties to even.
///
/// Goes through the correctly rounded decimal rendering so that values such
/// as `0.125` land on `0.12` and `2.675` (stored just below) on `2.67`.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle element, or the average of the two middle elements for even lengths.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Element at index `floor(fraction * len)` of `sorted`, without interpolation.
///
/// Fails with `InsufficientSamples` when that index falls outside the slice,
/// which includes every fraction on an empty slice and `fraction >= 1.0`.
pub fn rank_percentile(sorted: &[f64], fraction: f64) -> Result<f64> {
    if !fraction.is_finite() || fraction < 0.0 {
        return Err(SimulationError::InvalidParameter {
            name: "fraction",
            value: fraction,
            reason: "must be a finite non-negative fraction",
        });
    }
    let index = (fraction * sorted.len() as f64).floor() as usize;
    sorted
        .get(index)
        .copied()
        .ok_or(SimulationError::InsufficientSamples {
            fraction,
            len: sorted.len(),
        })
}

/// Percentage (0-100) of `values` strictly below `threshold`, rounded to cents.
///
/// Empty input yields `0.0`.
pub fn percent_below(values: &[f64], threshold: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let below = values.iter().filter(|&&v| v < threshold).count();
    round_to_cents(below as f64 / values.len() as f64 * 100.0)
}
