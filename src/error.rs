//! Error types for portsweep.
//!
//! Uses `thiserror` for ergonomic error definitions. Only configuration and
//! output errors stop the program; `ScanError` is recorded on the port's
//! result and never escapes the worker pool.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::PortError;

/// Why a single connection attempt did not produce an open port.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("connection refused")]
    ConnectionRefused,

    #[error("connection timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("host unreachable")]
    HostUnreachable,

    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("failed to resolve '{host}': {reason}")]
    Resolution { host: String, reason: String },

    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Configuration problems detected before the scan starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("hostname is required")]
    EmptyHostname,

    #[error(transparent)]
    Port(#[from] PortError),

    #[error("invalid timeout format '{value}': {reason}")]
    InvalidTimeout { value: String, reason: String },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("workers must be at least 1")]
    ZeroWorkers,

    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid config file format: {0}")]
    InvalidFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures while rendering a finished scan.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to create output file {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
