//! CSV output formatting.

use crate::scanner::ScanSummary;
use std::io::Write;

/// Write one row per result, in the order the results were collected.
pub fn write_csv<W: Write>(summary: &ScanSummary, out: &mut W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["Hostname", "Port", "Status", "Service", "Banner", "Error"])?;

    for result in &summary.results {
        wtr.write_record([
            result.hostname.as_str(),
            &result.port.to_string(),
            &result.status.to_string(),
            result.service.as_deref().unwrap_or(""),
            result.banner.as_deref().unwrap_or(""),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
