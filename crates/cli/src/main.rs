mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mc-portfolio", about = "Monte Carlo portfolio terminal value simulator")]
struct Cli {
    /// Log level for this binary (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration portfolio (10000 over 20 periods, 7% mean, 15% vol, 5000 paths)
    Demo {
        /// Seed for the return generator (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a simulation with custom parameters
    Run {
        /// Starting portfolio value
        #[arg(long, default_value = "10000")]
        initial_value: f64,
        /// Number of compounding periods per path
        #[arg(long, default_value = "20")]
        periods: usize,
        /// Expected per-period return as a fraction (0.07 = 7%)
        #[arg(long, default_value = "0.07", allow_hyphen_values = true)]
        mean_return: f64,
        /// Per-period return standard deviation
        #[arg(long, default_value = "0.15")]
        volatility: f64,
        /// Number of independent paths
        #[arg(long, default_value = "1000")]
        paths: usize,
        /// Seed for the return generator (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Extra rank percentiles to report, as fractions in [0, 1)
        #[arg(long = "percentile", value_delimiter = ',')]
        percentiles: Vec<f64>,
        /// Also report the probability of ending below this value
        #[arg(long, allow_hyphen_values = true)]
        threshold: Option<f64>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match cli.command {
        Commands::Demo { seed } => commands::demo::run(seed),
        Commands::Run {
            initial_value,
            periods,
            mean_return,
            volatility,
            paths,
            seed,
            percentiles,
            threshold,
            format,
        } => commands::run::run(
            initial_value,
            periods,
            mean_return,
            volatility,
            paths,
            seed,
            &percentiles,
            threshold,
            format,
        ),
    }
}
