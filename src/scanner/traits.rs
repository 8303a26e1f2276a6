//! Scanner trait abstraction.
//!
//! Defines the per-port result model and the common interface the worker
//! pool drives, so the pool can be exercised without touching the network.

use crate::types::Port;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a scanned port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// A TCP connection was established within the timeout.
    Open,
    /// The connection was refused, timed out, or could not be attempted.
    Closed,
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Result of scanning a single port. Immutable once handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortResult {
    /// Host the port belongs to.
    pub hostname: String,
    /// The port number that was scanned.
    pub port: Port,
    /// Status determined by the scan.
    pub status: PortStatus,
    /// Detected or inferred service name (open ports only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// First line the service sent unprompted, trimmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Why the connection attempt failed (closed ports only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PortResult {
    /// An open port with nothing else known yet.
    pub fn open(hostname: impl Into<String>, port: Port) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            status: PortStatus::Open,
            service: None,
            banner: None,
            error: None,
        }
    }

    /// A closed port carrying the dial error text.
    pub fn closed(hostname: impl Into<String>, port: Port, error: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            status: PortStatus::Closed,
            service: None,
            banner: None,
            error: Some(error.into()),
        }
    }

    /// Set the service label.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the banner.
    pub fn with_banner(mut self, banner: Option<String>) -> Self {
        self.banner = banner;
        self
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

/// Trait for port scanner implementations.
///
/// `scan_port` never fails: every outcome, including dial errors, is folded
/// into the returned [`PortResult`].
///
/// # Example
///
/// ```ignore
/// use portsweep::scanner::{PortResult, Scanner};
/// use portsweep::types::Port;
///
/// async fn probe<S: Scanner>(scanner: &S, port: Port) -> PortResult {
///     scanner.scan_port(port).await
/// }
/// ```
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Host this scanner targets.
    fn hostname(&self) -> &str;

    /// Scan a single port.
    async fn scan_port(&self, port: Port) -> PortResult;
}
