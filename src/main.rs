use cex_spread_scanner::{MonitorConfig, SpreadMonitor};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = MonitorConfig::from_env()?;
    info!(
        "polling every {:?} for spreads in ({}%, {}%)",
        config.poll_interval, config.thresholds.min_percent, config.thresholds.max_percent
    );

    SpreadMonitor::new(config).run().await;
    Ok(())
}
