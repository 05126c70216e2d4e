use crate::layout::MAX_PADDING;
use crate::logger::{Logger, LoggerConfig};
use crate::style::ColorChoice;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "BOXLOG_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BOXLOG_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`~/.config/boxlog/config.toml` on Linux)
/// 4. ~/.boxlog.toml (fallback when no config directory is known)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("boxlog").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".boxlog.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Logger settings as stored in `config.toml`:
///
/// ```toml
/// show_timestamp = false
/// padding = 2
/// color = "never"
/// ```
///
/// Missing keys take their defaults. `padding` is clamped into `1..=MAX_PADDING`
/// when the logger is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_timestamp: bool,
    pub padding: i64,
    pub color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_timestamp: true,
            padding: 1,
            color: ColorChoice::Auto,
        }
    }
}

impl Settings {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(explicit_path)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    pub fn logger_config(&self) -> LoggerConfig {
        let padding = usize::try_from(self.padding.max(1)).unwrap_or(MAX_PADDING);
        LoggerConfig::new(self.show_timestamp, padding)
    }

    pub fn logger(&self) -> Logger {
        Logger::with_styler(self.logger_config(), self.color.theme())
    }
}
