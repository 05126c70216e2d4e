use boxlog_core::{BoxLayout, Level, Logger, LoggerConfig, Role, Theme, render_box};
use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

fn noon() -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(12, 0, 0)
}

/// Borders and interior lines all span `2 * padding + content + 2` columns
#[test]
fn test_single_line_boxes_are_rectangular() {
    let messages = ["x", "short", "a somewhat longer status line", "Ünïcödé", "多字节文字"];

    for message in messages {
        for padding in 1..=3 {
            for timestamp in [None, noon()] {
                let layout = BoxLayout::new(padding, timestamp);
                let rendered = render_box(&Theme::Plain, Role::Info, message, None, &layout);
                let content = message.width().max(if timestamp.is_some() { 8 } else { 0 });
                let expected = 2 * padding + content + 2;

                for line in rendered.lines() {
                    assert_eq!(line.width(), expected, "{message:?} p={padding}\n{rendered}");
                }
            }
        }
    }
}

#[test]
fn test_tagged_top_border_is_wider_by_tag_decoration() {
    let layout = BoxLayout::new(1, None);
    let rendered = render_box(&Theme::Plain, Role::Error, "connection refused", Some("DB"), &layout);
    let lines: Vec<&str> = rendered.lines().collect();

    let body = lines[1].width();
    assert_eq!(lines[2].width(), body);
    assert_eq!(lines[0].width(), body + " DB ".len());
    assert!(lines[0].starts_with("╭ DB ─"));
    assert!(lines[2].starts_with("╰─"));
}

#[test]
fn test_effective_padding_is_at_least_one() {
    for requested in 0..5 {
        let config = LoggerConfig::new(false, requested);
        assert_eq!(config.padding(), requested.max(1));
    }
}

#[test]
fn test_logger_renders_every_level() {
    let logger = Logger::with_styler(LoggerConfig::new(false, 1), Theme::Plain);
    let at = NaiveTime::from_hms_opt(0, 0, 0).unwrap();

    for level in Level::ALL {
        let rendered = logger.render_at(level, "same text", Some("TAG"), at);
        assert_eq!(
            rendered,
            "╭ TAG ───────────╮\n│ same text │\n╰───────────╯",
            "{level}"
        );
    }
}

#[test]
fn test_colored_levels_differ() {
    let logger = Logger::with_styler(LoggerConfig::new(false, 1), Theme::Ansi);
    let warning = logger.render(Level::Warning, "same", None);
    let error = logger.render(Level::Error, "same", None);
    assert_ne!(warning, error);
    for line in error.lines() {
        assert!(line.starts_with("\u{1b}["), "{line:?}");
    }
}

#[test]
fn test_timestamp_line_uses_wall_clock_format() {
    let logger = Logger::with_styler(LoggerConfig::new(true, 1), Theme::Plain);
    let rendered = logger.render(Level::Ongoing, "syncing", None);
    let stamp = rendered.lines().nth(1).unwrap();
    let time = stamp.trim_matches(|c| c == '│' || c == ' ');
    assert!(NaiveTime::parse_from_str(time, "%H:%M:%S").is_ok(), "{stamp:?}");
}
