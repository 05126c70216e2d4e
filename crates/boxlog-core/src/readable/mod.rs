//! Human-readable renderings of sizes, rates, durations, counts and status codes.

mod number;
mod time;

pub use number::{count, file_size, mbps, memory_usage, percentage};
pub use time::{duration, latency, seconds, timestamp};

use std::net::IpAddr;

/// `404 (Client Error)`
pub fn status(code: u16) -> String {
    let class = match code {
        100..=199 => "Informational",
        200..=299 => "Success",
        300..=399 => "Redirection",
        400..=499 => "Client Error",
        500.. => "Server Error",
        _ => "Unknown",
    };
    format!("{} ({})", code, class)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Upper-cased level name, or `UNKNOWN` for anything outside the usual five.
pub fn level_name(level: &str) -> &'static str {
    match level.to_uppercase().as_str() {
        "DEBUG" => "DEBUG",
        "INFO" => "INFO",
        "WARN" => "WARN",
        "ERROR" => "ERROR",
        "FATAL" => "FATAL",
        _ => "UNKNOWN",
    }
}

pub fn ip(addr: Option<IpAddr>) -> String {
    addr.map_or_else(|| "unknown".to_string(), |addr| addr.to_string())
}
