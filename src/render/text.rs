//! Formatted plain-text rendering with a banner header.

use chrono::{DateTime, Local, TimeZone};

use super::MarkupStripper;

/// Default banner title.
pub const DEFAULT_BANNER_TITLE: &str = "🚀 HƯỚNG DẪN DEPLOY THEME EDITOR LÊN VPS";

/// Options for the formatted text output.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Title centered inside the banner
    pub banner_title: String,

    /// Banner width in characters
    pub width: usize,

    /// Character used for the banner rules
    pub rule_char: char,

    /// Label preceding the generation timestamp
    pub date_label: String,

    /// `chrono` format string for the timestamp
    pub date_format: String,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the banner title.
    pub fn with_banner_title(mut self, title: impl Into<String>) -> Self {
        self.banner_title = title.into();
        self
    }

    /// Set the banner width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            banner_title: DEFAULT_BANNER_TITLE.to_string(),
            width: 80,
            rule_char: '=',
            date_label: "📅 Tạo ngày:".to_string(),
            date_format: "%d/%m/%Y %H:%M".to_string(),
        }
    }
}

/// Render Markdown as formatted text stamped with the current local time.
pub fn to_text(markdown: &str, options: &TextOptions) -> String {
    to_text_at(markdown, options, &Local::now())
}

/// Render Markdown as formatted text stamped with the given time.
pub fn to_text_at<Tz>(markdown: &str, options: &TextOptions, generated: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let rule: String = std::iter::repeat(options.rule_char)
        .take(options.width)
        .collect();

    let mut output = String::new();
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&center(&options.banner_title, options.width));
    output.push('\n');
    output.push_str(&rule);
    output.push_str("\n\n");
    output.push_str(&format!(
        "{} {}",
        options.date_label,
        generated.format(&options.date_format)
    ));
    output.push_str("\n\n");
    output.push_str(&MarkupStripper::new().process(markdown));
    output
}

/// Center text in `width` columns, counting characters.
///
/// With odd padding the extra space goes right for even widths and left for
/// odd widths.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
