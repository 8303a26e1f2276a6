//! Thread-safe result collection and scan summary.
//!
//! Workers only ever append; counts are derived in a single pass once the
//! pool has drained.

use crate::scanner::traits::{PortResult, PortStatus};
use crate::types::{Port, PortRange};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{Duration, Instant};

/// Complete scan results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    pub hostname: String,
    pub start_port: Port,
    pub end_port: Port,
    pub open_ports: usize,
    pub closed_ports: usize,
    /// Wall-clock time the scan started.
    pub started_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_duration")]
    pub total_time: Duration,
    /// Results in the order workers produced them.
    pub results: Vec<PortResult>,
}

impl ScanSummary {
    /// Number of ports in the requested range.
    pub fn ports_requested(&self) -> usize {
        usize::from(self.end_port.as_u16() - self.start_port.as_u16()) + 1
    }

    /// Iterate over open results in arrival order.
    pub fn open_results(&self) -> impl Iterator<Item = &PortResult> {
        self.results.iter().filter(|r| r.is_open())
    }

    /// Results ordered by port number.
    pub fn sorted_results(&self) -> Vec<&PortResult> {
        let mut sorted: Vec<&PortResult> = self.results.iter().collect();
        sorted.sort_by_key(|r| r.port);
        sorted
    }

    /// Human-readable elapsed time, rounded to milliseconds.
    pub fn total_time_display(&self) -> String {
        format_duration(self.total_time)
    }
}

fn format_duration(duration: Duration) -> String {
    let rounded = Duration::from_millis(duration.as_millis() as u64);
    humantime::format_duration(rounded).to_string()
}

fn serialize_duration<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_duration(*duration))
}

/// Append-only sink shared by every worker in a scan.
///
/// One mutex guards the collection, so each append is a single indivisible
/// push. The lock is never held across an await point.
#[derive(Debug)]
pub struct Aggregator {
    hostname: String,
    range: PortRange,
    results: Mutex<Vec<PortResult>>,
    started: Instant,
    started_at: DateTime<Utc>,
    elapsed: OnceLock<Duration>,
}

impl Aggregator {
    /// Create an empty aggregator sized for `range`; the scan clock starts now.
    pub fn new(hostname: impl Into<String>, range: PortRange) -> Self {
        Self {
            hostname: hostname.into(),
            range,
            results: Mutex::new(Vec::with_capacity(range.len())),
            started: Instant::now(),
            started_at: Utc::now(),
            elapsed: OnceLock::new(),
        }
    }

    /// Record one port's result.
    pub fn append(&self, result: PortResult) {
        self.lock().push(result);
    }

    /// Build the summary from everything appended so far.
    ///
    /// Must only be called after every worker has finished. The elapsed time
    /// is fixed by the first call, so repeated calls return equal summaries.
    pub fn finalize(&self) -> ScanSummary {
        let total_time = *self.elapsed.get_or_init(|| self.started.elapsed());
        let results = self.lock().clone();

        let (open_ports, closed_ports) =
            results
                .iter()
                .fold((0, 0), |(open, closed), result| match result.status {
                    PortStatus::Open => (open + 1, closed),
                    PortStatus::Closed => (open, closed + 1),
                });

        ScanSummary {
            hostname: self.hostname.clone(),
            start_port: self.range.start(),
            end_port: self.range.end(),
            open_ports,
            closed_ports,
            started_at: self.started_at,
            total_time,
            results,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PortResult>> {
        // A panic while pushing cannot leave a Vec half-written, so a
        // poisoned lock still guards consistent data.
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
