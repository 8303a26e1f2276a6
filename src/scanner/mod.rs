//! Scanner module - runs the bounded worker pool.
//!
//! A fixed number of tokio tasks share one [`PortSource`] and one
//! [`Aggregator`]. Each task pulls ports until the source is drained; the
//! summary is produced only after every task has been joined.

pub mod aggregator;
pub mod tcp;
pub mod traits;

use crate::config::ScanConfig;
use crate::types::PortSource;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use aggregator::{Aggregator, ScanSummary};
pub use tcp::TcpConnectScanner;
pub use traits::{PortResult, PortStatus, Scanner};

/// Execute a complete TCP connect scan described by `config`.
pub async fn run_scan(config: &ScanConfig) -> ScanSummary {
    let scanner = TcpConnectScanner::new(config.hostname.clone(), config.timeout)
        .with_banners(config.grab_banners);
    run_with_scanner(Arc::new(scanner), config).await
}

/// Drive `scanner` over the configured range with `config.workers` workers.
///
/// Returns once every port has been scanned exactly once.
pub async fn run_with_scanner(scanner: Arc<dyn Scanner>, config: &ScanConfig) -> ScanSummary {
    let source = Arc::new(PortSource::new(config.range));
    let aggregator = Arc::new(Aggregator::new(config.hostname.clone(), config.range));
    let progress = config.verbose.then(|| progress_bar(config.range.len()));

    info!(
        target_host = %config.hostname,
        ports = %config.range,
        workers = config.workers,
        timeout = ?config.timeout,
        "starting scan"
    );

    let workers = (0..config.workers).map(|id| {
        tokio::spawn(worker(
            id,
            Arc::clone(&scanner),
            Arc::clone(&source),
            Arc::clone(&aggregator),
            progress.clone(),
        ))
    });

    for outcome in join_all(workers).await {
        if let Err(e) = outcome {
            warn!(error = %e, "scan worker terminated abnormally");
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Scan complete");
    }

    let summary = aggregator.finalize();
    info!(
        open = summary.open_ports,
        closed = summary.closed_ports,
        elapsed = %summary.total_time_display(),
        "scan finished"
    );
    summary
}

/// One pool member: scan ports until the source runs dry.
async fn worker(
    id: usize,
    scanner: Arc<dyn Scanner>,
    source: Arc<PortSource>,
    aggregator: Arc<Aggregator>,
    progress: Option<ProgressBar>,
) -> usize {
    let mut scanned = 0;

    while let Some(port) = source.take_next() {
        let result = scanner.scan_port(port).await;
        debug!(worker = id, port = port.as_u16(), status = %result.status, "port scanned");

        if let Some(ref pb) = progress {
            pb.inc(1);
            if result.is_open() {
                pb.set_message(format!("Found open port: {}", port));
            }
        }

        aggregator.append(result);
        scanned += 1;
    }

    debug!(worker = id, scanned, "worker finished");
    scanned
}

fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}
