use std::io::{self, Write};
use std::time::Duration;

use mc_portfolio_sim::Summary;
use serde_json::json;

use crate::OutputFormat;

pub struct Report {
    pub paths: usize,
    pub seed: Option<u64>,
    pub expected_value: f64,
    pub summary: Option<Summary>,
    pub percentiles: Vec<(f64, f64)>,
    pub threshold: Option<(f64, f64)>,
    pub probability_of_loss: f64,
}

pub fn print_report(report: &Report, elapsed: Duration, format: OutputFormat) -> anyhow::Result<()> {
    tracing::info!(
        paths = report.paths,
        seed = ?report.seed,
        elapsed_s = elapsed.as_secs_f64(),
        "Simulation complete"
    );

    match format {
        OutputFormat::Text => write_text(&mut io::stdout().lock(), report, elapsed)?,
        OutputFormat::Json => print_json(report, elapsed)?,
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, report: &Report, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "========================================")?;
    writeln!(out, "  Paths:          {}", report.paths)?;
    if let Some(seed) = report.seed {
        writeln!(out, "  Seed:           {}", seed)?;
    }
    writeln!(out, "  Time:           {:.2}s", elapsed.as_secs_f64())?;
    writeln!(out, "  Expected value: {:.2}", report.expected_value)?;
    writeln!(out, "========================================")?;

    writeln!(out, "Portfolio Simulation Summary:")?;
    if let Some(summary) = &report.summary {
        for (label, value) in summary.entries() {
            writeln!(out, "{}: {:.2}", label, value)?;
        }
    }
    for (fraction, value) in &report.percentiles {
        writeln!(out, "{} Percentile: {:.2}", percentile_label(*fraction), value)?;
    }
    if let Some((threshold, probability)) = report.threshold {
        writeln!(out, "Probability Below {:.2}: {:.2} %", threshold, probability)?;
    }
    writeln!(out, "Probability of Loss: {:.2} %", report.probability_of_loss)
}

fn print_json(report: &Report, elapsed: Duration) -> anyhow::Result<()> {
    let percentiles: Vec<_> = report
        .percentiles
        .iter()
        .map(|(fraction, value)| json!({ "fraction": fraction, "value": value }))
        .collect();
    let threshold = report
        .threshold
        .map(|(threshold, probability)| json!({ "threshold": threshold, "probability": probability }));

    let value = json!({
        "paths": report.paths,
        "seed": report.seed,
        "expected_value": report.expected_value,
        "elapsed_seconds": elapsed.as_secs_f64(),
        "summary": report.summary,
        "percentiles": percentiles,
        "threshold": threshold,
        "probability_of_loss": report.probability_of_loss,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// "5th", "21st", "99.5th" style label for a fraction.
fn percentile_label(fraction: f64) -> String {
    let pct = fraction * 100.0;
    let rounded = pct.round();
    if (pct - rounded).abs() > 1e-9 {
        return format!("{}th", pct);
    }
    let n = rounded as i64;
    let suffix = match (n % 10, n % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report) -> Vec<String> {
        let mut out = Vec::new();
        write_text(&mut out, report, Duration::from_millis(1_250)).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn sample_report(summary: Option<Summary>) -> Report {
        Report {
            paths: 10,
            seed: Some(42),
            expected_value: 11_000.0,
            summary,
            percentiles: vec![(0.25, 10_500.0)],
            threshold: Some((-100.0, 0.0)),
            probability_of_loss: 12.5,
        }
    }

    #[test]
    fn test_text_report_line_order() {
        let summary = Summary {
            mean: 11_000.0,
            median: 10_900.5,
            best: 14_000.0,
            worst: 8_000.0,
            p5: 8_500.0,
            p95: 13_500.0,
        };
        let lines = render(&sample_report(Some(summary)));

        assert!(lines.contains(&"  Time:           1.25s".to_string()));
        assert!(lines.contains(&"  Expected value: 11000.00".to_string()));

        let header = lines
            .iter()
            .position(|l| l == "Portfolio Simulation Summary:")
            .unwrap();
        let expected = [
            "Mean Final Value: 11000.00",
            "Median Final Value: 10900.50",
            "Best Case: 14000.00",
            "Worst Case: 8000.00",
            "5th Percentile: 8500.00",
            "95th Percentile: 13500.00",
            "25th Percentile: 10500.00",
            "Probability Below -100.00: 0.00 %",
            "Probability of Loss: 12.50 %",
        ];
        assert_eq!(&lines[header + 1..], &expected[..]);
    }

    #[test]
    fn test_text_report_without_summary_ends_with_loss_line() {
        let lines = render(&sample_report(None));
        assert_eq!(lines.last().unwrap(), "Probability of Loss: 12.50 %");
        assert!(!lines.iter().any(|l| l.starts_with("Mean Final Value")));
    }

    #[test]
    fn test_percentile_label() {
        assert_eq!(percentile_label(0.05), "5th");
        assert_eq!(percentile_label(0.21), "21st");
        assert_eq!(percentile_label(0.12), "12th");
        assert_eq!(percentile_label(0.33), "33rd");
        assert_eq!(percentile_label(0.5), "50th");
    }
}
