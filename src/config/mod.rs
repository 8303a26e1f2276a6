//! Configuration management for portsweep.
//!
//! `ScanConfig` is the validated, immutable input to one scan. `Settings`
//! holds user defaults loaded from an optional JSON file.

mod scan;
mod settings;

pub use scan::{parse_timeout, ScanConfig};
pub use settings::Settings;
