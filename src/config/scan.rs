//! Per-scan configuration and its validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::{Port, PortRange};
use std::time::Duration;

/// Default per-connection timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 100;

/// Configuration for a scan. Read-only once the scan starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Target hostname or IP literal.
    pub hostname: String,
    /// Ports to probe.
    pub range: PortRange,
    /// Bounds each connection attempt, and separately each banner read.
    pub timeout: Duration,
    /// Number of concurrent workers, and so the cap on in-flight connections.
    pub workers: usize,
    /// Whether to read a greeting line from open ports.
    pub grab_banners: bool,
    /// Show progress while scanning.
    pub verbose: bool,
}

impl ScanConfig {
    /// Create a configuration with default timeout and worker count.
    pub fn new(hostname: impl Into<String>, range: PortRange) -> Self {
        Self {
            hostname: hostname.into(),
            range,
            timeout: DEFAULT_TIMEOUT,
            workers: DEFAULT_WORKERS,
            grab_banners: true,
            verbose: false,
        }
    }

    /// Build and validate a configuration from unchecked user input.
    ///
    /// `timeout` uses humantime syntax such as `1s`, `500ms` or `1m`.
    pub fn from_raw(
        hostname: &str,
        start_port: u32,
        end_port: u32,
        timeout: &str,
        workers: usize,
    ) -> ConfigResult<Self> {
        let start = Port::try_from(start_port)?;
        let end = Port::try_from(end_port)?;
        let range = PortRange::new(start, end)?;

        let config = Self::new(hostname.trim(), range)
            .with_timeout(parse_timeout(timeout)?)
            .with_workers(workers);
        config.validate()?;
        Ok(config)
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Enable or disable banner grabbing.
    pub fn with_banners(mut self, grab_banners: bool) -> Self {
        self.grab_banners = grab_banners;
        self
    }

    /// Enable verbose progress output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check the invariants the scanner relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.hostname.trim().is_empty() {
            return Err(ConfigError::EmptyHostname);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }
}

/// Parse a timeout string such as `1s` or `500ms`.
pub fn parse_timeout(value: &str) -> ConfigResult<Duration> {
    let timeout = humantime::parse_duration(value.trim()).map_err(|e| {
        ConfigError::InvalidTimeout {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    if timeout.is_zero() {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortError;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_timeout("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_timeout("1m").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_timeout(" 2s ").unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        assert!(matches!(
            parse_timeout("invalid"),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            parse_timeout(""),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(parse_timeout("0s"), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_from_raw_valid() {
        let config = ScanConfig::from_raw("localhost", 1, 100, "1s", 10).unwrap();
        assert_eq!(config.hostname, "localhost");
        assert_eq!(config.range.len(), 100);
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.workers, 10);
        assert!(config.grab_banners);
        assert!(!config.verbose);
    }

    #[test]
    fn test_from_raw_port_errors() {
        assert!(matches!(
            ScanConfig::from_raw("localhost", 0, 10, "1s", 1),
            Err(ConfigError::Port(PortError::OutOfRange(0)))
        ));
        assert!(matches!(
            ScanConfig::from_raw("localhost", 1, 65536, "1s", 1),
            Err(ConfigError::Port(PortError::OutOfRange(65536)))
        ));
        assert!(matches!(
            ScanConfig::from_raw("localhost", 443, 80, "1s", 1),
            Err(ConfigError::Port(PortError::InvalidRange(443, 80)))
        ));
    }

    #[test]
    fn test_from_raw_other_errors() {
        assert!(matches!(
            ScanConfig::from_raw("  ", 1, 10, "1s", 1),
            Err(ConfigError::EmptyHostname)
        ));
        assert!(matches!(
            ScanConfig::from_raw("localhost", 1, 10, "1s", 0),
            Err(ConfigError::ZeroWorkers)
        ));
        let err = ScanConfig::from_raw("localhost", 80, 80, "invalid", 1).unwrap_err();
        assert!(err.to_string().contains("invalid timeout format"));
    }
}
