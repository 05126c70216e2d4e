//! Styling capability: a pure `text -> text` transform per display role.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Log category a box is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warning,
    Message,
    Info,
    Error,
    Success,
    Ongoing,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Warning,
        Level::Message,
        Level::Info,
        Level::Error,
        Level::Success,
        Level::Ongoing,
    ];

    pub fn role(self) -> Role {
        match self {
            Level::Warning => Role::Warning,
            Level::Message => Role::Message,
            Level::Info => Role::Info,
            Level::Error => Role::Error,
            Level::Success => Role::Success,
            Level::Ongoing => Role::Ongoing,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warning => write!(f, "warning"),
            Level::Message => write!(f, "message"),
            Level::Info => write!(f, "info"),
            Level::Error => write!(f, "error"),
            Level::Success => write!(f, "success"),
            Level::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// Display role. Every [`Level`] has one, plus `Tag` for the label spliced into a top border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Warning,
    Message,
    Info,
    Error,
    Success,
    Ongoing,
    Tag,
}

impl From<Level> for Role {
    fn from(level: Level) -> Self {
        level.role()
    }
}

/// Applies the display attribute of a role to a string.
///
/// Implementations are applied exactly once per rendered line and are never
/// chained, so they need not be idempotent.
pub trait Styler {
    fn paint(&self, role: Role, text: &str) -> String;
}

impl<S: Styler + ?Sized> Styler for &S {
    fn paint(&self, role: Role, text: &str) -> String {
        (**self).paint(role, text)
    }
}

/// Built-in stylers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// ANSI colors via owo-colors
    #[default]
    Ansi,
    /// No escape sequences at all
    Plain,
}

impl Styler for Theme {
    fn paint(&self, role: Role, text: &str) -> String {
        match self {
            Theme::Plain => text.to_string(),
            Theme::Ansi => match role {
                Role::Warning => text.yellow().to_string(),
                Role::Message => text.blue().to_string(),
                // default terminal color
                Role::Info => text.to_string(),
                Role::Error => text.red().to_string(),
                Role::Success => text.green().to_string(),
                Role::Ongoing => text.bright_yellow().to_string(),
                Role::Tag => text.bold().to_string(),
            },
        }
    }
}

/// When to emit colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colors only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn theme(self) -> Theme {
        match self {
            ColorChoice::Always => Theme::Ansi,
            ColorChoice::Never => Theme::Plain,
            ColorChoice::Auto => {
                if std::io::stdout().is_terminal() {
                    Theme::Ansi
                } else {
                    Theme::Plain
                }
            }
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => write!(f, "auto"),
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
        }
    }
}
