use mc_portfolio_shared::config::SimulationParameters;

use super::run::simulate_and_report;
use crate::OutputFormat;

pub fn run(seed: Option<u64>) -> anyhow::Result<()> {
    simulate_and_report(SimulationParameters::demo(), seed, &[], None, OutputFormat::Text)
}
