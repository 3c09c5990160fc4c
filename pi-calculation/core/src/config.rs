use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Run parameters for one pi calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiConfig {
    /// Number of worker actors in the round-robin roster
    pub workers: usize,
    /// Series terms summed by each work unit
    pub elements_per_unit: u64,
    /// Number of work units (and therefore partial results)
    pub work_units: u64,
    /// Give up collecting after this many milliseconds; `None` waits forever
    pub collect_timeout_ms: Option<u64>,
}

impl Default for PiConfig {
    fn default() -> Self {
        Self {
            workers: 50,
            elements_per_unit: 10_000,
            work_units: 100_000,
            collect_timeout_ms: None,
        }
    }
}

impl PiConfig {
    pub fn new(workers: usize, elements_per_unit: u64, work_units: u64) -> Self {
        Self {
            workers,
            elements_per_unit,
            work_units,
            collect_timeout_ms: None,
        }
    }

    pub fn with_collect_timeout(mut self, timeout: Duration) -> Self {
        self.collect_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn collect_timeout(&self) -> Option<Duration> {
        self.collect_timeout_ms.map(Duration::from_millis)
    }

    /// Total number of series terms across all work units
    pub fn total_terms(&self) -> Option<u64> {
        self.elements_per_unit.checked_mul(self.work_units)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(
                path = %path.display(),
                "Config file not found, using default configuration"
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidConfig("workers must be at least 1".to_string()));
        }
        if self.elements_per_unit == 0 {
            return Err(Error::InvalidConfig(
                "elements_per_unit must be at least 1".to_string(),
            ));
        }
        if self.work_units == 0 {
            return Err(Error::InvalidConfig("work_units must be at least 1".to_string()));
        }
        // Largest index is total - 1 and its denominator is 2 * index + 1
        let fits = self
            .total_terms()
            .and_then(|total| total.checked_mul(2))
            .is_some();
        if !fits {
            return Err(Error::InvalidConfig(format!(
                "{} work units of {} elements overflow the series index",
                self.work_units, self.elements_per_unit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = PiConfig::default();
        assert_eq!(config.workers, 50);
        assert_eq!(config.elements_per_unit, 10_000);
        assert_eq!(config.work_units, 100_000);
        assert_eq!(config.collect_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_counts_are_rejected() {
        for config in [
            PiConfig::new(0, 10, 10),
            PiConfig::new(1, 0, 10),
            PiConfig::new(1, 10, 0),
        ] {
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_overflowing_range_is_rejected() {
        let config = PiConfig::new(4, u64::MAX / 2, 4);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PiConfig = serde_json::from_str(r#"{"workers": 4}"#).unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.work_units, 100_000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"workers": 4, "elements_per_unit": 1000, "work_units": 8, "collect_timeout_ms": 250}}"#
        )
        .unwrap();

        let config = PiConfig::load(file.path()).unwrap();

        let expected = PiConfig::new(4, 1000, 8).with_collect_timeout(Duration::from_millis(250));
        assert_eq!(config, expected);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "workers = 4").unwrap();
        assert!(matches!(
            PiConfig::load(file.path()),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PiConfig::load_or_default(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, PiConfig::default());
    }
}
