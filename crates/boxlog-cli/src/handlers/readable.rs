use crate::types::ReadableKind;
use anyhow::{Context, Result};
use boxlog_core::readable;
use std::str::FromStr;

pub fn handle(kind: ReadableKind, value: &str) -> Result<()> {
    println!("{}", convert(kind, value)?);
    Ok(())
}

fn convert(kind: ReadableKind, value: &str) -> Result<String> {
    Ok(match kind {
        ReadableKind::Size => readable::file_size(parse(kind, value)?),
        ReadableKind::Seconds => readable::seconds(parse(kind, value)?),
        ReadableKind::Mbps => readable::mbps(parse(kind, value)?),
        ReadableKind::Percent => readable::percentage(parse(kind, value)?),
        ReadableKind::Latency => readable::latency(parse(kind, value)?),
        ReadableKind::Count => readable::count(parse(kind, value)?),
        ReadableKind::Status => readable::status(parse(kind, value)?),
        ReadableKind::Level => readable::level_name(value).to_string(),
    })
}

fn parse<T>(kind: ReadableKind, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid {} value", value, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        assert_eq!(convert(ReadableKind::Size, "1536").unwrap(), "1.50 KB");
        assert_eq!(convert(ReadableKind::Count, "-1234567").unwrap(), "-1,234,567");
        assert_eq!(convert(ReadableKind::Status, "404").unwrap(), "404 (Client Error)");
        assert_eq!(convert(ReadableKind::Level, "debug").unwrap(), "DEBUG");
        assert_eq!(convert(ReadableKind::Latency, "0.5").unwrap(), "500.00 μs");
    }

    #[test]
    fn test_convert_rejects_garbage() {
        let err = convert(ReadableKind::Seconds, "soon").unwrap_err();
        assert_eq!(err.to_string(), "'soon' is not a valid seconds value");
    }
}
