use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize stderr logging so stdout carries only the report.
///
/// `RUST_LOG` takes precedence over `level`, which applies to the binary only;
/// the simulation library defaults to `warn`.
pub fn init_logging(level: &str) {
    let default_filter = format!("mc_portfolio={level},mc_portfolio_sim=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::debug!(filter = %default_filter, "Logging initialized");
}
