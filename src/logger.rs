//! Logger module
//!
//! Logging helpers for the page server: the startup ready line on stdout,
//! errors on stderr, and an optional per-request access log.

use chrono::{DateTime, Local};
use hyper::Method;
use std::net::SocketAddr;

use crate::config::ServerConfig;

/// Print the startup ready message.
///
/// Exactly one line on stdout once the listener is bound, built from the
/// configured host and port rather than the resolved socket address.
pub fn log_server_start(server: &ServerConfig) {
    println!("Server is running at http://{}:{}", server.host, server.port);
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Write one access log line
pub fn log_access(method: &Method, path: &str, status: u16, body_bytes: u64) {
    println!(
        "{}",
        format_access_line(Local::now(), method, path, status, body_bytes)
    );
}

/// Common-log-format fields: timestamp, request line, status, body size
fn format_access_line(
    time: DateTime<Local>,
    method: &Method,
    path: &str,
    status: u16,
    body_bytes: u64,
) -> String {
    format!(
        "[{}] \"{method} {path}\" {status} {body_bytes}",
        time.format("%d/%b/%Y:%H:%M:%S %z")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_access_line_format() {
        let time = Local.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();
        let line = format_access_line(time, &Method::GET, "/", 200, 131);
        assert!(line.starts_with("[05/Mar/2024:10:30:00"));
        assert!(line.ends_with("\"GET /\" 200 131"));
    }

    #[test]
    fn test_access_line_records_status_and_size() {
        let time = Local.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();
        let line = format_access_line(time, &Method::POST, "/missing", 404, 13);
        assert!(line.contains("\"POST /missing\""));
        assert!(line.ends_with("404 13"));
    }
}
