//! Rendering result with statistics.

use crate::model::OutputDocument;
use serde::{Deserialize, Serialize};

/// Result of rendering, including the document and statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered document
    pub document: OutputDocument,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(document: OutputDocument, stats: RenderStats) -> Self {
        Self { document, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of headings (title included)
    pub heading_count: u32,

    /// Number of body paragraphs
    pub paragraph_count: u32,

    /// Number of code lines emitted
    pub code_line_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of clickable hyperlinks
    pub hyperlink_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Number of page breaks inserted by pagination
    pub page_break_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment code line count.
    pub fn add_code_line(&mut self) {
        self.code_line_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment hyperlink count.
    pub fn add_hyperlink(&mut self) {
        self.hyperlink_count += 1;
    }

    /// Increment horizontal rule count.
    pub fn add_horizontal_rule(&mut self) {
        self.horizontal_rule_count += 1;
    }

    /// Record page breaks inserted by pagination.
    pub fn add_page_breaks(&mut self, count: usize) {
        self.page_break_count += count as u32;
    }

    /// Total paragraphs emitted.
    pub fn total_paragraphs(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.code_line_count
            + self.list_item_count
            + self.horizontal_rule_count
    }
}
