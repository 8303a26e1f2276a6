//! Service detection based on well-known port numbers and banner text.
//!
//! The port table always wins; banner keywords are only consulted for ports
//! the table does not know.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Label returned when neither the port nor the banner is recognised.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Static map of well-known ports to service names.
static PORT_SERVICES: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(21, "FTP");
    m.insert(22, "SSH");
    m.insert(23, "Telnet");
    m.insert(25, "SMTP");
    m.insert(53, "DNS");
    m.insert(80, "HTTP");
    m.insert(110, "POP3");
    m.insert(143, "IMAP");
    m.insert(443, "HTTPS");
    m.insert(993, "IMAPS");
    m.insert(995, "POP3S");
    m.insert(3306, "MySQL");
    m.insert(5432, "PostgreSQL");
    m.insert(6379, "Redis");
    m.insert(8080, "HTTP-Alt");
    m.insert(8443, "HTTPS-Alt");

    m
});

/// Banner keywords in match priority order.
const BANNER_KEYWORDS: &[(&str, &str)] = &[
    ("ssh", "SSH"),
    ("http", "HTTP"),
    ("ftp", "FTP"),
    ("smtp", "SMTP"),
    ("pop3", "POP3"),
    ("imap", "IMAP"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("redis", "Redis"),
];

/// Look up the service name for a well-known port.
///
/// Returns `None` if the port is not in the table.
pub fn well_known_service(port: u16) -> Option<&'static str> {
    PORT_SERVICES.get(&port).copied()
}

/// Guess a service from banner text alone.
pub fn service_from_banner(banner: &str) -> Option<&'static str> {
    let banner = banner.to_lowercase();
    BANNER_KEYWORDS
        .iter()
        .find(|(keyword, _)| banner.contains(keyword))
        .map(|&(_, service)| service)
}

/// Classify the service on `port`, given whatever banner it sent.
///
/// Pure and total: unknown ports with an empty or unrecognised banner
/// yield [`UNKNOWN_SERVICE`].
pub fn classify(port: u16, banner: &str) -> &'static str {
    well_known_service(port)
        .or_else(|| service_from_banner(banner))
        .unwrap_or(UNKNOWN_SERVICE)
}
