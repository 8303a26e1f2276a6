//! Banner grabbing functionality for TCP connections.
//!
//! Passively reads the first line a service sends after the connection is
//! established. Nothing is written to the peer.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::time::timeout;
use tracing::trace;

/// Maximum bytes to read for a banner line, newline included.
pub const MAX_BANNER_SIZE: u64 = 1024;

/// Read one newline-terminated line from `stream` within `read_timeout`.
///
/// The deadline starts when this function is called. Returns `None` on
/// timeout, read error, EOF before a newline, a line longer than
/// [`MAX_BANNER_SIZE`], or a line that is blank after trimming. Bytes that
/// arrived before a failure are discarded.
pub async fn read_banner<S>(stream: S, read_timeout: Duration) -> Option<String>
where
    S: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream.take(MAX_BANNER_SIZE));
    let mut line = Vec::new();

    match timeout(read_timeout, reader.read_until(b'\n', &mut line)).await {
        Ok(Ok(_)) if line.last() == Some(&b'\n') => sanitize_banner(&line),
        Ok(Ok(n)) => {
            trace!(bytes = n, "no complete banner line before EOF or size cap");
            None
        }
        Ok(Err(e)) => {
            trace!(error = %e, "banner read failed");
            None
        }
        Err(_) => None,
    }
}

/// Decode a raw banner line and trim surrounding whitespace.
fn sanitize_banner(data: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(data);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
