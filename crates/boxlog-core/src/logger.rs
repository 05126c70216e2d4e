use crate::layout::{BoxLayout, clamp_padding, render_box};
use crate::style::{ColorChoice, Level, Styler, Theme};
use chrono::{Local, NaiveTime};
use once_cell::sync::Lazy;
use std::io::{self, Write};

/// Immutable logger settings. Padding is kept within `1..=MAX_PADDING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    show_timestamp: bool,
    padding: usize,
}

impl LoggerConfig {
    pub fn new(show_timestamp: bool, padding: usize) -> Self {
        Self {
            show_timestamp,
            padding: clamp_padding(padding),
        }
    }

    pub fn show_timestamp(&self) -> bool {
        self.show_timestamp
    }

    pub fn padding(&self) -> usize {
        self.padding
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(true, 1)
    }
}

/// Writes one framed box per call to stdout.
///
/// A logger is stateless apart from its configuration; independent loggers with
/// different settings can coexist. The [`default_logger`] backs the free functions
/// [`warning`], [`message`], [`info`], [`error`], [`success`] and [`ongoing`].
#[derive(Debug, Clone)]
pub struct Logger<S = Theme> {
    config: LoggerConfig,
    styler: S,
}

impl Logger<Theme> {
    /// Logger with colors enabled when stdout is a terminal.
    pub fn new(show_timestamp: bool, padding: usize) -> Self {
        Self::with_styler(
            LoggerConfig::new(show_timestamp, padding),
            ColorChoice::Auto.theme(),
        )
    }
}

impl Default for Logger<Theme> {
    fn default() -> Self {
        Self::new(true, 1)
    }
}

impl<S: Styler> Logger<S> {
    pub fn with_styler(config: LoggerConfig, styler: S) -> Self {
        Self { config, styler }
    }

    pub fn config(&self) -> LoggerConfig {
        self.config
    }

    pub fn styler(&self) -> &S {
        &self.styler
    }

    /// Render a box for `level`, stamping it with the current local time if enabled.
    pub fn render(&self, level: Level, message: &str, tag: Option<&str>) -> String {
        self.render_at(level, message, tag, Local::now().time())
    }

    /// Same as [`Logger::render`] with an explicit clock reading.
    pub fn render_at(
        &self,
        level: Level,
        message: &str,
        tag: Option<&str>,
        now: NaiveTime,
    ) -> String {
        let layout = BoxLayout::new(
            self.config.padding,
            self.config.show_timestamp.then_some(now),
        );
        render_box(&self.styler, level.role(), message, tag, &layout)
    }

    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        level: Level,
        message: &str,
        tag: Option<&str>,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.render(level, message, tag))
    }

    pub fn log(&self, level: Level, message: &str, tag: Option<&str>) {
        println!("{}", self.render(level, message, tag));
    }

    pub fn warning(&self, message: &str, tag: Option<&str>) {
        self.log(Level::Warning, message, tag);
    }

    pub fn message(&self, message: &str, tag: Option<&str>) {
        self.log(Level::Message, message, tag);
    }

    pub fn info(&self, message: &str, tag: Option<&str>) {
        self.log(Level::Info, message, tag);
    }

    pub fn error(&self, message: &str, tag: Option<&str>) {
        self.log(Level::Error, message, tag);
    }

    pub fn success(&self, message: &str, tag: Option<&str>) {
        self.log(Level::Success, message, tag);
    }

    pub fn ongoing(&self, message: &str, tag: Option<&str>) {
        self.log(Level::Ongoing, message, tag);
    }
}

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::default);

/// Process-wide logger: timestamps on, padding 1, colors when stdout is a terminal.
/// Built on first use and never mutated.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

pub fn warning(message: &str, tag: Option<&str>) {
    default_logger().warning(message, tag);
}

pub fn message(message: &str, tag: Option<&str>) {
    default_logger().message(message, tag);
}

pub fn info(message: &str, tag: Option<&str>) {
    default_logger().info(message, tag);
}

pub fn error(message: &str, tag: Option<&str>) {
    default_logger().error(message, tag);
}

pub fn success(message: &str, tag: Option<&str>) {
    default_logger().success(message, tag);
}

pub fn ongoing(message: &str, tag: Option<&str>) {
    default_logger().ongoing(message, tag);
}
