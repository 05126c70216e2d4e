use chrono::NaiveDateTime;
use std::time::Duration;

/// Whole seconds as "45 seconds", "12 minutes", "2 hours 5 minutes", "3 days 1 hours 0 minutes".
pub fn seconds(total: i64) -> String {
    if total < 60 {
        format!("{} seconds", total)
    } else if total < 3600 {
        format!("{} minutes", total / 60)
    } else if total < 86400 {
        format!("{} hours {} minutes", total / 3600, (total % 3600) / 60)
    } else {
        format!(
            "{} days {} hours {} minutes",
            total / 86400,
            (total % 86400) / 3600,
            (total % 3600) / 60
        )
    }
}

/// Sub-millisecond in ns, sub-second in ms, sub-minute in s, longer via [`seconds`].
pub fn duration(elapsed: Duration) -> String {
    if elapsed < Duration::from_millis(1) {
        format!("{} ns", elapsed.as_nanos())
    } else if elapsed < Duration::from_secs(1) {
        format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0)
    } else if elapsed < Duration::from_secs(60) {
        format!("{:.2} s", elapsed.as_secs_f64())
    } else {
        seconds(i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Latency given in milliseconds.
pub fn latency(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.2} μs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.2} ms", ms)
    } else {
        format!("{:.2} s", ms / 1000.0)
    }
}

/// `2024-03-01 14:05:09.042`
pub fn timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_seconds() {
        assert_eq!(seconds(45), "45 seconds");
        assert_eq!(seconds(125), "2 minutes");
        assert_eq!(seconds(3600 + 300), "1 hours 5 minutes");
        assert_eq!(seconds(2 * 86400 + 3 * 3600 + 60), "2 days 3 hours 1 minutes");
    }

    #[test]
    fn test_duration() {
        assert_eq!(duration(Duration::from_nanos(750)), "750 ns");
        assert_eq!(duration(Duration::from_micros(2500)), "2.50 ms");
        assert_eq!(duration(Duration::from_millis(1500)), "1.50 s");
        assert_eq!(duration(Duration::from_secs(300)), "5 minutes");
    }

    #[test]
    fn test_latency() {
        assert_eq!(latency(0.25), "250.00 μs");
        assert_eq!(latency(12.5), "12.50 ms");
        assert_eq!(latency(2500.0), "2.50 s");
    }

    #[test]
    fn test_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_milli_opt(14, 5, 9, 42)
            .unwrap();
        assert_eq!(timestamp(at), "2024-03-01 14:05:09.042");
    }
}
