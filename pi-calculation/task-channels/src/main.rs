use anyhow::{Context, Result};
use clap::Parser;
use pi_calculation_core::{Cli, ConsoleSink};
use pi_calculation_task_channels::PiSystem;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve().context("Failed to load configuration")?;

    let system = PiSystem::start(&config, ConsoleSink).context("Failed to start actors")?;

    // Setup Ctrl+C handler
    let ctrl_c_token = system.cancellation_token();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!("Ctrl+C received, initiating shutdown");
                ctrl_c_token.cancel();
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C"),
        }
    });

    system.begin()?;
    let completion = system.wait().await.context("Pi calculation did not complete")?;

    tracing::info!(
        value = completion.aggregate.approximate_value,
        elapsed_ms = completion.aggregate.elapsed_millis,
        "Done"
    );
    Ok(())
}
