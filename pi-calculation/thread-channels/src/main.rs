use anyhow::{Context, Result};
use clap::Parser;
use pi_calculation_core::{Cli, ConsoleSink};
use pi_calculation_thread_channels::ThreadPiSystem;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve().context("Failed to load configuration")?;

    let system = ThreadPiSystem::start(&config, ConsoleSink).context("Failed to start actors")?;

    let shutdown = system.shutdown_signal();
    ctrlc::set_handler(move || {
        tracing::warn!("Ctrl+C received, initiating shutdown");
        shutdown.shutdown();
    })
    .context("Failed to install Ctrl+C handler")?;

    system.begin()?;
    let completion = system.wait().context("Pi calculation did not complete")?;

    tracing::info!(
        value = completion.aggregate.approximate_value,
        elapsed_ms = completion.aggregate.elapsed_millis,
        "Done"
    );
    Ok(())
}
