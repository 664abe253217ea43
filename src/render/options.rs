//! Rendering options and configuration.

use crate::model::StyleSheet;

/// Substring of a level-1 heading that marks it as the document title.
pub const DEFAULT_TITLE_MARKER: &str = "HƯỚNG DẪN DEPLOY";

/// Section titles that trigger a page break.
pub const DEFAULT_SECTION_TITLES: [&str; 8] = [
    "CHUẨN BỊ VPS",
    "CÀI ĐẶT MÔI TRƯỜNG",
    "DEPLOY ỨNG DỤNG",
    "CẤU HÌNH NGINX",
    "SSL CERTIFICATE",
    "DATABASE SETUP",
    "MONITORING & LOGS",
    "BACKUP & MAINTENANCE",
];

/// Options for rendering the element tree into a rich document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Paragraph and run styles
    pub styles: StyleSheet,

    /// Level-1 headings containing this string use the Title style
    pub title_marker: String,

    /// Character repeated to draw a horizontal rule
    pub rule_char: char,

    /// Number of rule characters
    pub rule_width: usize,

    /// Section titles that trigger a page break
    pub section_titles: Vec<String>,

    /// Which matching sections get a page break
    pub pagination: PaginationMode,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the title marker.
    pub fn with_title_marker(mut self, marker: impl Into<String>) -> Self {
        self.title_marker = marker.into();
        self
    }

    /// Set the rule character and width.
    pub fn with_rule(mut self, ch: char, width: usize) -> Self {
        self.rule_char = ch;
        self.rule_width = width;
        self
    }

    /// Replace the section titles.
    pub fn with_section_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pagination mode.
    pub fn with_pagination(mut self, mode: PaginationMode) -> Self {
        self.pagination = mode;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// The rule paragraph text.
    pub fn rule_text(&self) -> String {
        std::iter::repeat(self.rule_char)
            .take(self.rule_width)
            .collect()
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            styles: StyleSheet::default(),
            title_marker: DEFAULT_TITLE_MARKER.to_string(),
            rule_char: '─',
            rule_width: 50,
            section_titles: DEFAULT_SECTION_TITLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pagination: PaginationMode::FirstMatch,
            collect_stats: false,
        }
    }
}

/// Which section-title matches receive a page break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Break before the first matching paragraph only
    #[default]
    FirstMatch,
    /// Break before every matching paragraph
    EveryMatch,
    /// Never insert breaks
    Disabled,
}
