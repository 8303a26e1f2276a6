//! JSON output formatting.

use crate::error::OutputResult;
use crate::scanner::ScanSummary;
use std::io::Write;

/// Write the summary, with its nested results, as pretty-printed JSON.
pub fn write_json<W: Write>(summary: &ScanSummary, out: &mut W) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{Aggregator, PortResult};
    use crate::types::{Port, PortRange};

    #[test]
    fn test_json_output() {
        let p = |n| Port::new(n).unwrap();
        let aggregator = Aggregator::new("localhost", PortRange::new(p(22), p(23)).unwrap());
        aggregator.append(PortResult::open("localhost", p(22)).with_service("SSH"));
        aggregator.append(PortResult::closed("localhost", p(23), "connection refused"));

        let mut buf = Vec::new();
        write_json(&aggregator.finalize(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("\n  \"hostname\": \"localhost\""));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["open_ports"], 1);
        assert_eq!(value["closed_ports"], 1);
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
        assert_eq!(value["results"][1]["error"], "connection refused");
        assert!(value["results"][0].get("error").is_none());
    }
}
