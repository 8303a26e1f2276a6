//! # portsweep - A Concurrent TCP Port Scanner
//!
//! portsweep dials every port in a range through a bounded pool of workers,
//! reads the greeting line that many services send unprompted, guesses the
//! service, and summarises the results.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portsweep::config::ScanConfig;
//! use portsweep::scanner::run_scan;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ScanConfig::from_raw("127.0.0.1", 1, 1024, "500ms", 200).unwrap();
//!     let summary = run_scan(&config).await;
//!
//!     for result in summary.open_results() {
//!         println!("{} is open ({:?})", result.port, result.service);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - `Port`, `PortRange`, and the concurrent `PortSource`
//! - [`scanner`] - Dialer, worker pool, and result aggregation
//! - [`banner`] - Passive one-line banner reads
//! - [`services`] - Port and banner based service classification
//! - [`config`] - Scan configuration and user settings
//! - [`output`] - Plain text, JSON, and CSV renderers
//! - [`error`] - Error types

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{ConfigError, OutputError, ScanError};
pub use scanner::{run_scan, PortResult, PortStatus, ScanSummary, Scanner};
pub use types::{Port, PortRange, PortSource};
