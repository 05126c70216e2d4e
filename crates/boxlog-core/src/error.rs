use std::fmt;

/// Result type for boxlog-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around rendering: conversion of foreign values and configuration loading.
/// Rendering itself never fails.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),
    /// Value could not be serialized through serde_json
    Serialize(serde_json::Error),
    /// Value serialized fine but is not a key/value mapping (e.g. a bare number or list)
    NotAMapping(&'static str),
    /// Configuration is unusable
    Config(String),
    /// Configuration file is not valid TOML
    Toml(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Serialize(err) => write!(f, "Serialization error: {}", err),
            Error::NotAMapping(kind) => {
                write!(f, "Expected a mapping of string keys, got {}", kind)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Toml(err) => write!(f, "TOML parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Serialize(err) => Some(err),
            Error::Toml(err) => Some(err),
            Error::NotAMapping(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}
