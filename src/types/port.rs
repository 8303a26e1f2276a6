//! Port types with validation.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` describes an inclusive scan range and `PortSource` hands the
//! ports of a range out to concurrent workers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// A validated network port number (1-65535).
///
/// Using a newtype prevents accidental misuse of raw u16 values
/// and ensures port numbers are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Port {
    type Error = PortError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(PortError::OutOfRange(value))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u32),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
}

/// A range of ports (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    pub const fn start(&self) -> Port {
        self.start
    }

    pub const fn end(&self) -> Port {
        self.end
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    /// Check if the range is empty (never true for valid ranges).
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn contains(&self, port: Port) -> bool {
        port.0 >= self.start.0 && port.0 <= self.end.0
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Hands out the ports of a range, ascending, each exactly once.
///
/// Any number of workers may call [`PortSource::take_next`] concurrently through a
/// shared reference. The cursor is a `u32` so advancing past 65535 cannot
/// wrap back into the range.
#[derive(Debug)]
pub struct PortSource {
    next: AtomicU32,
    end: u32,
}

impl PortSource {
    pub fn new(range: PortRange) -> Self {
        Self {
            next: AtomicU32::new(u32::from(range.start.0)),
            end: u32::from(range.end.0),
        }
    }

    /// Take the next undelivered port, or `None` once the range is drained.
    pub fn take_next(&self) -> Option<Port> {
        let candidate = self.next.fetch_add(1, Ordering::Relaxed);
        if candidate > self.end {
            // Park the cursor so repeated polling after exhaustion cannot overflow.
            self.next.store(self.end + 1, Ordering::Relaxed);
            return None;
        }
        // candidate is within start..=end, both valid ports
        Some(Port(candidate as u16))
    }

    /// Number of ports not yet handed out.
    pub fn remaining(&self) -> usize {
        let next = self.next.load(Ordering::Relaxed);
        (self.end + 1).saturating_sub(next) as usize
    }
}
