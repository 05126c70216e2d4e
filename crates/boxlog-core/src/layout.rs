//! Box layout: frames a (possibly multi-line) message with rounded box-drawing borders.
//!
//! ```text
//! ╭ TAG ───────────╮
//! │ 14:03:27       │
//! │ first line     │
//! │ second line    │
//! ╰────────────────╯
//! ```
//!
//! Widths are measured in terminal columns. The tag is inserted after the top-left
//! corner rather than replacing rule characters, so a tagged top border is wider than
//! the rest of the box by the tag decoration.

use crate::style::{Role, Styler};
use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

pub const TOP_LEFT: &str = "╭";
pub const TOP_RIGHT: &str = "╮";
pub const BOTTOM_LEFT: &str = "╰";
pub const BOTTOM_RIGHT: &str = "╯";
pub const HORIZONTAL: &str = "─";
pub const VERTICAL: &str = "│";

/// 24-hour wall-clock time with second granularity
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Padding values are clamped into `1..=MAX_PADDING`
pub const MAX_PADDING: usize = 64;

/// Columns reserved around a tag: one space on each side plus the corner and one rule char
const TAG_DECORATION: usize = 4;

/// Per-render layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    /// Spaces between the vertical border and the text, on each side (`1..=MAX_PADDING`)
    pub padding: usize,
    /// Time shown on the first interior line; `None` hides the line
    pub timestamp: Option<NaiveTime>,
}

impl BoxLayout {
    pub fn new(padding: usize, timestamp: Option<NaiveTime>) -> Self {
        Self {
            padding: clamp_padding(padding),
            timestamp,
        }
    }
}

pub fn clamp_padding(padding: usize) -> usize {
    padding.clamp(1, MAX_PADDING)
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::new(1, None)
    }
}

/// Render `message` as a framed block. Every line (borders included) is painted with
/// `role` individually; the tag is painted with [`Role::Tag`] before being spliced in.
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render_box<S: Styler + ?Sized>(
    styler: &S,
    role: Role,
    message: &str,
    tag: Option<&str>,
    layout: &BoxLayout,
) -> String {
    let padding = clamp_padding(layout.padding);
    let tag = tag.filter(|t| !t.is_empty());
    let timestamp = layout
        .timestamp
        .map(|time| time.format(TIMESTAMP_FORMAT).to_string());

    let lines: Vec<&str> = message
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut content_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    if let Some(tag) = tag {
        content_width = content_width.max(tag.width() + TAG_DECORATION);
    }
    if let Some(ts) = &timestamp {
        content_width = content_width.max(ts.width());
    }
    let inner_width = content_width + padding * 2;

    let mut rendered = Vec::with_capacity(lines.len() + 3);

    let rule = HORIZONTAL.repeat(inner_width);
    let top = match tag {
        Some(tag) => format!(
            "{TOP_LEFT} {} {rule}{TOP_RIGHT}",
            styler.paint(Role::Tag, tag)
        ),
        None => format!("{TOP_LEFT}{rule}{TOP_RIGHT}"),
    };
    rendered.push(styler.paint(role, &top));

    if let Some(ts) = &timestamp {
        rendered.push(styler.paint(role, &pad_line(ts, padding, inner_width)));
    }

    for line in &lines {
        rendered.push(styler.paint(role, &pad_line(line, padding, inner_width)));
    }

    rendered.push(styler.paint(role, &format!("{BOTTOM_LEFT}{rule}{BOTTOM_RIGHT}")));

    rendered.join("\n")
}

/// One interior line: border, left padding, text, right fill up to `inner_width`, border.
///
/// Text wider than the space left never gets cut; the fill saturates at zero and the
/// right border moves out instead.
pub(crate) fn pad_line(text: &str, padding: usize, inner_width: usize) -> String {
    let fill = inner_width.saturating_sub(padding + text.width());
    format!(
        "{VERTICAL}{}{text}{}{VERTICAL}",
        " ".repeat(padding),
        " ".repeat(fill)
    )
}
