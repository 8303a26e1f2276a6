//! TCP Connect Scanner implementation.
//!
//! Performs standard TCP connect scans using the operating system's
//! socket API. An established handshake means open; anything else,
//! including an expired timeout, means closed.

use crate::banner::read_banner;
use crate::error::{ScanError, ScanResult};
use crate::scanner::traits::{PortResult, Scanner};
use crate::services::classify;
use crate::types::Port;
use async_trait::async_trait;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// TCP Connect Scanner.
///
/// Uses standard socket connect() calls to determine port status.
/// Does not require elevated privileges.
///
/// Each attempt is made exactly once. The timeout bounds name resolution
/// plus the handshake; the banner read on an open port gets its own window
/// of the same length.
pub struct TcpConnectScanner {
    hostname: String,
    timeout: Duration,
    grab_banners: bool,
}

impl TcpConnectScanner {
    /// Create a new TCP connect scanner that reads banners from open ports.
    ///
    /// # Arguments
    /// * `hostname` - Target hostname or IP literal
    /// * `timeout` - Connection timeout per port
    pub fn new(hostname: impl Into<String>, timeout: Duration) -> Self {
        Self {
            hostname: hostname.into(),
            timeout,
            grab_banners: true,
        }
    }

    /// Enable or disable banner grabbing.
    pub fn with_banners(mut self, grab_banners: bool) -> Self {
        self.grab_banners = grab_banners;
        self
    }

    /// Attempt one connection to `port`.
    ///
    /// The returned stream is owned by the caller and closed when dropped.
    pub async fn dial(&self, port: Port) -> ScanResult<TcpStream> {
        let addr = (self.hostname.as_str(), port.as_u16());
        match timeout(self.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(e)) => Err(self.classify_error(e)),
            Err(_) => Err(ScanError::Timeout(self.timeout)),
        }
    }

    fn classify_error(&self, e: io::Error) -> ScanError {
        if e.kind() == io::ErrorKind::ConnectionRefused {
            return ScanError::ConnectionRefused;
        }

        let error_str = e.to_string().to_lowercase();
        if error_str.contains("refused") {
            ScanError::ConnectionRefused
        } else if error_str.contains("unreachable") {
            if error_str.contains("host") {
                ScanError::HostUnreachable
            } else {
                ScanError::NetworkUnreachable(e.to_string())
            }
        } else if error_str.contains("lookup") || error_str.contains("resolve") {
            ScanError::Resolution {
                host: self.hostname.clone(),
                reason: e.to_string(),
            }
        } else {
            ScanError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl Scanner for TcpConnectScanner {
    fn hostname(&self) -> &str {
        &self.hostname
    }

    async fn scan_port(&self, port: Port) -> PortResult {
        match self.dial(port).await {
            Ok(mut stream) => {
                let banner = if self.grab_banners {
                    read_banner(&mut stream, self.timeout).await
                } else {
                    None
                };
                drop(stream);

                let service = classify(port.as_u16(), banner.as_deref().unwrap_or_default());
                PortResult::open(&self.hostname, port)
                    .with_service(service)
                    .with_banner(banner)
            }
            Err(e) => {
                trace!(port = port.as_u16(), error = %e, "dial failed");
                PortResult::closed(&self.hostname, port, e.to_string())
            }
        }
    }
}
