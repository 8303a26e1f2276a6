//! Command-line interface definitions for portsweep.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flags left
//! unset fall back to [`Settings`].

use crate::config::{ScanConfig, Settings};
use crate::error::{ConfigError, ConfigResult};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A fast concurrent TCP port scanner.
///
/// Use responsibly and only scan systems you own or have permission to test.
#[derive(Parser, Debug)]
#[command(name = "portsweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A fast concurrent TCP port scanner", long_about = None)]
#[command(after_help = "Examples:
  portsweep -H localhost -s 1 -e 1024
  portsweep -H scanme.nmap.org -s 20 -e 25 -f json
  portsweep -H example.com -w 500 -t 500ms
  portsweep -H target.example -o results.txt")]
pub struct Cli {
    /// Target hostname or IP address
    #[arg(short = 'H', long, value_name = "HOST")]
    pub hostname: String,

    /// Start of port range
    #[arg(short, long, value_name = "PORT")]
    pub start_port: Option<u32>,

    /// End of port range
    #[arg(short, long, value_name = "PORT")]
    pub end_port: Option<u32>,

    /// Connection timeout (e.g., 1s, 500ms)
    #[arg(short, long)]
    pub timeout: Option<String>,

    /// Number of concurrent workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip reading banners from open ports
    #[arg(long)]
    pub no_banner: bool,

    /// Verbose output (progress bar and info logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a JSON settings file
    #[arg(long, value_name = "PATH", env = "PORTSWEEP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Text,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Everything needed to run and render one scan.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub config: ScanConfig,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Default tracing level for the crate when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Merge flags over `settings` and validate the result.
    pub fn resolve(&self, settings: &Settings) -> ConfigResult<ScanRequest> {
        let timeout = self.timeout.as_deref().unwrap_or(&settings.timeout);
        let config = ScanConfig::from_raw(
            &self.hostname,
            self.start_port.unwrap_or(settings.start_port),
            self.end_port.unwrap_or(settings.end_port),
            timeout,
            self.workers.unwrap_or(settings.workers),
        )?
        .with_banners(settings.grab_banners && !self.no_banner)
        .with_verbose(self.verbose);

        let format = match self.format {
            Some(format) => format,
            None => settings.format.parse()?,
        };

        Ok(ScanRequest {
            config,
            format,
            output: self.output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["portsweep"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_help_matches_log_level() {
        use clap::CommandFactory;
        let command = Cli::command();
        let verbose = command
            .get_arguments()
            .find(|arg| arg.get_id() == "verbose")
            .unwrap();
        let help = verbose.get_help().unwrap().to_string();

        let level = parse(&["-H", "h", "-v"]).log_level();
        assert_eq!(level, "info");
        assert!(help.contains(&format!("{level} logging")), "help was: {help}");
        assert_eq!(parse(&["-H", "h"]).log_level(), "warn");
    }

    #[test]
    fn test_hostname_required() {
        assert!(Cli::try_parse_from(["portsweep"]).is_err());
    }

    #[test]
    fn test_defaults_come_from_settings() {
        let request = parse(&["-H", "localhost"]).resolve(&Settings::default()).unwrap();
        assert_eq!(request.config.range.to_string(), "1-1024");
        assert_eq!(request.config.timeout, Duration::from_secs(1));
        assert_eq!(request.config.workers, 100);
        assert_eq!(request.format, OutputFormat::Text);
        assert!(request.config.grab_banners);
        assert!(request.output.is_none());
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = parse(&[
            "-H", "example.com", "-s", "20", "-e", "25", "-t", "500ms", "-w", "500", "-f", "json",
            "-o", "out.json", "--no-banner", "-v",
        ]);
        let request = cli.resolve(&Settings::default()).unwrap();
        assert_eq!(request.config.hostname, "example.com");
        assert_eq!(request.config.range.to_string(), "20-25");
        assert_eq!(request.config.timeout, Duration::from_millis(500));
        assert_eq!(request.config.workers, 500);
        assert_eq!(request.format, OutputFormat::Json);
        assert_eq!(request.output, Some(PathBuf::from("out.json")));
        assert!(!request.config.grab_banners);
        assert!(request.config.verbose);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let settings = Settings::default();
        assert!(parse(&["-H", "h", "-s", "0"]).resolve(&settings).is_err());
        assert!(parse(&["-H", "h", "-e", "70000"]).resolve(&settings).is_err());
        assert!(parse(&["-H", "h", "-s", "100", "-e", "10"]).resolve(&settings).is_err());
        assert!(parse(&["-H", "h", "-w", "0"]).resolve(&settings).is_err());
        assert!(parse(&["-H", "h", "-t", "soon"]).resolve(&settings).is_err());
    }

    #[test]
    fn test_settings_format() {
        let settings = Settings {
            format: "CSV".to_string(),
            ..Settings::default()
        };
        let request = parse(&["-H", "h"]).resolve(&settings).unwrap();
        assert_eq!(request.format, OutputFormat::Csv);

        let bad = Settings {
            format: "xml".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            parse(&["-H", "h"]).resolve(&bad),
            Err(ConfigError::UnknownFormat(_))
        ));
    }
}
