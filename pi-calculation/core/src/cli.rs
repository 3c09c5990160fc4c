use crate::config::PiConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Approximate π by spreading the Leibniz series over a pool of worker actors
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// JSON configuration file; missing files fall back to the defaults
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Number of workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Series terms per work unit
    #[arg(short, long)]
    pub elements: Option<u64>,

    /// Number of work units
    #[arg(short, long)]
    pub messages: Option<u64>,

    /// Abort collection after this many milliseconds
    #[arg(long)]
    pub collect_timeout_ms: Option<u64>,
}

impl Cli {
    /// Config file values overridden by any flags given on the command line
    pub fn resolve(&self) -> Result<PiConfig> {
        let mut config = PiConfig::load_or_default(&self.config)?;
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(elements) = self.elements {
            config.elements_per_unit = elements;
        }
        if let Some(messages) = self.messages {
            config.work_units = messages;
        }
        if self.collect_timeout_ms.is_some() {
            config.collect_timeout_ms = self.collect_timeout_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_flags_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.json");
        let cli = Cli::try_parse_from([
            "pi",
            "--config",
            missing.to_str().unwrap(),
            "--workers",
            "4",
            "--elements",
            "1000",
            "--messages",
            "8",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();

        assert_eq!(config, PiConfig::new(4, 1000, 8));
    }

    #[test]
    fn test_zero_workers_flag_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.json");
        let cli = Cli::try_parse_from([
            "pi",
            "-c",
            missing.to_str().unwrap(),
            "-w",
            "0",
        ])
        .unwrap();

        assert!(matches!(cli.resolve(), Err(Error::InvalidConfig(_))));
    }
}
