use boxlog_core::ColorChoice;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DumpFormat {
    Tree,
    Flat,
    Json,
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpFormat::Tree => write!(f, "tree"),
            DumpFormat::Flat => write!(f, "flat"),
            DumpFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListStyle {
    Quoted,
    Indexed,
    Lines,
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStyle::Quoted => write!(f, "quoted"),
            ListStyle::Indexed => write!(f, "indexed"),
            ListStyle::Lines => write!(f, "lines"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReadableKind {
    /// Byte count
    Size,
    /// Whole seconds
    Seconds,
    /// Bytes per second
    Mbps,
    Percent,
    /// Milliseconds
    Latency,
    Count,
    /// HTTP status code
    Status,
    Level,
}

impl fmt::Display for ReadableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadableKind::Size => write!(f, "size"),
            ReadableKind::Seconds => write!(f, "seconds"),
            ReadableKind::Mbps => write!(f, "mbps"),
            ReadableKind::Percent => write!(f, "percent"),
            ReadableKind::Latency => write!(f, "latency"),
            ReadableKind::Count => write!(f, "count"),
            ReadableKind::Status => write!(f, "status"),
            ReadableKind::Level => write!(f, "level"),
        }
    }
}
