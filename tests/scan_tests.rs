use portsweep::cli::OutputFormat;
use portsweep::output;
use portsweep::scanner::run_scan;
use portsweep::{PortStatus, ScanConfig};
use std::collections::HashSet;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// Start a loopback server that greets every client with `greeting`.
async fn greeting_server(greeting: &'static [u8]) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let _ = socket.write_all(greeting).await;
                let _ = tokio::io::copy(&mut socket, &mut tokio::io::sink()).await;
            });
        }
    });
    port
}

/// Start a loopback server that never speaks first.
async fn silent_server() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = tokio::io::copy(&mut socket, &mut tokio::io::sink()).await;
            });
        }
    });
    port
}

fn window(port: u16) -> (u32, u32) {
    let start = u32::from(port).saturating_sub(3).max(1);
    let end = (u32::from(port) + 3).min(65535);
    (start, end)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn scan_finds_listener_and_banner() {
    let port = greeting_server(b"SSH-2.0-OpenSSH_9.6\r\n").await;
    let (start, end) = window(port);
    let config = ScanConfig::from_raw("127.0.0.1", start, end, "500ms", 4).unwrap();

    let summary = run_scan(&config).await;

    assert_eq!(summary.results.len(), (end - start + 1) as usize);
    assert_eq!(summary.open_ports + summary.closed_ports, summary.results.len());

    let hit = summary
        .results
        .iter()
        .find(|r| r.port.as_u16() == port)
        .expect("listener port scanned");
    assert_eq!(hit.status, PortStatus::Open);
    assert_eq!(hit.banner.as_deref(), Some("SSH-2.0-OpenSSH_9.6"));
    assert_eq!(hit.service.as_deref(), Some("SSH"));
    assert_eq!(hit.error, None);
    assert_eq!(hit.hostname, "127.0.0.1");

    for closed in summary.results.iter().filter(|r| !r.is_open()) {
        assert!(closed.error.is_some());
        assert!(closed.banner.is_none());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn silent_open_port_has_no_banner() {
    let port = silent_server().await;
    let config = ScanConfig::from_raw("127.0.0.1", port.into(), port.into(), "100ms", 1).unwrap();

    let summary = run_scan(&config).await;

    assert_eq!(summary.open_ports, 1);
    let result = &summary.results[0];
    assert!(result.is_open());
    assert_eq!(result.banner, None);
    assert_eq!(result.error, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn worker_count_does_not_change_open_set() {
    let first = greeting_server(b"220 ftp ready\n").await;
    let second = silent_server().await;
    let low = first.min(second);
    let high = first.max(second);
    // keep the range small even if the two ephemeral ports are far apart
    let (start, end) = if high - low <= 64 {
        (u32::from(low), u32::from(high))
    } else {
        window(first)
    };

    let serial = ScanConfig::from_raw("127.0.0.1", start, end, "500ms", 1).unwrap();
    let parallel = ScanConfig::from_raw("127.0.0.1", start, end, "500ms", 500).unwrap();

    let open = |summary: &portsweep::ScanSummary| -> HashSet<u16> {
        summary.open_results().map(|r| r.port.as_u16()).collect()
    };

    let a = run_scan(&serial).await;
    let b = run_scan(&parallel).await;
    assert_eq!(a.results.len(), b.results.len());
    assert_eq!(open(&a), open(&b));
    assert!(open(&a).contains(&first));
}

#[tokio::test]
async fn scan_then_render_to_file() {
    let port = greeting_server(b"+OK POP3 ready\r\n").await;
    let config = ScanConfig::from_raw("127.0.0.1", port.into(), port.into(), "500ms", 2).unwrap();
    let summary = run_scan(&config).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let mut dest = output::open_destination(Some(path.as_path())).unwrap();
    output::render(&summary, OutputFormat::Csv, &mut dest, false).unwrap();
    drop(dest);

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Hostname,Port,Status,Service,Banner,Error"));
    assert_eq!(
        lines.next(),
        Some(format!("127.0.0.1,{port},open,POP3,+OK POP3 ready,").as_str())
    );
    assert_eq!(lines.next(), None);
}
