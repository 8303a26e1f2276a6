//! Plain text output formatting.
//!
//! Produces a summary block followed by the open ports, ordered by port.

use crate::scanner::ScanSummary;
use console::style;
use std::io::{self, Write};

/// Write results in human-readable plain text format.
///
/// Styling escapes are emitted only when `styled` is set.
pub fn write_plain<W: Write>(summary: &ScanSummary, out: &mut W, styled: bool) -> io::Result<()> {
    writeln!(out, "{}", style("Scan Summary").cyan().bold().force_styling(styled))?;
    writeln!(out, "============")?;
    writeln!(out, "Target: {}", summary.hostname)?;
    writeln!(
        out,
        "Port Range: {}-{}",
        summary.start_port, summary.end_port
    )?;
    writeln!(
        out,
        "Open Ports: {}",
        style(summary.open_ports).green().bold().force_styling(styled)
    )?;
    writeln!(out, "Closed Ports: {}", summary.closed_ports)?;
    writeln!(out, "Total Time: {}", summary.total_time_display())?;
    writeln!(out)?;

    if summary.open_ports == 0 {
        writeln!(out, "No open ports found.")?;
        return Ok(());
    }

    writeln!(out, "{}", style("Open Ports:").cyan().bold().force_styling(styled))?;
    writeln!(out, "===========")?;
    for result in summary.sorted_results().into_iter().filter(|r| r.is_open()) {
        write!(out, "{}:{}", result.hostname, result.port)?;
        if let Some(service) = &result.service {
            write!(out, " ({})", style(service).yellow().force_styling(styled))?;
        }
        if let Some(banner) = &result.banner {
            write!(out, " - {}", style(banner).dim().force_styling(styled))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(hostname: &str, range: &str, workers: usize) {
    eprintln!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("portsweep").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!(
        "{} Target: {} (ports {})",
        style("•").dim(),
        style(hostname).white().bold(),
        range
    );
    eprintln!("{} Workers: {}", style("•").dim(), style(workers).white().bold());
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
