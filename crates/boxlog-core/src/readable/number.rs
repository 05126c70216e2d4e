const BYTE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// "512 B", "1.50 KB", "3.00 GB"; anything past TB stays in TB.
pub fn file_size(size: i64) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else {
        scaled_bytes(size as f64)
    }
}

pub fn memory_usage(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        scaled_bytes(bytes as f64)
    }
}

fn scaled_bytes(size: f64) -> String {
    let mut value = size / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, BYTE_UNITS[unit])
}

/// Bytes per second as MB/s. Non-positive speeds read as zero.
pub fn mbps(bytes_per_second: f64) -> String {
    if bytes_per_second <= 0.0 {
        return "0.00 MB/s".to_string();
    }
    format!("{:.2} MB/s", bytes_per_second / (1024.0 * 1024.0))
}

/// Clamped to 0..=100.
pub fn percentage(value: f64) -> String {
    format!("{:.2}%", value.clamp(0.0, 100.0))
}

/// Thousands separated with commas: 1234567 -> "1,234,567"
pub fn count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
