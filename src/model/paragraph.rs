//! Rendered paragraph and run types.

use serde::{Deserialize, Serialize};

/// A paragraph of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in the paragraph
    pub content: Vec<InlineContent>,

    /// Style the paragraph is rendered under
    pub kind: ParagraphKind,
}

impl Paragraph {
    /// Create a new empty paragraph with the given style.
    pub fn new(kind: ParagraphKind) -> Self {
        Self {
            content: Vec::new(),
            kind,
        }
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(kind: ParagraphKind, text: impl Into<String>) -> Self {
        let mut p = Self::new(kind);
        p.add_text(text);
        p
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(InlineContent::Text(TextRun::new(text)));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a hyperlink run.
    pub fn add_hyperlink(&mut self, run: TextRun, url: impl Into<String>) {
        self.content.push(InlineContent::Hyperlink {
            run,
            url: url.into(),
        });
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content.iter().map(InlineContent::text).collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Iterate over the runs, hyperlinks included.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().map(|c| match c {
            InlineContent::Text(run) | InlineContent::Hyperlink { run, .. } => run,
        })
    }
}

/// The style a paragraph is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    /// Document title
    Title,
    /// Level 1 heading
    Heading1,
    /// Level 2 heading
    Heading2,
    /// Level 3 (and 4) heading
    Heading3,
    /// One line of a code block
    CodeLine,
    /// Item of an unordered list
    ListBullet,
    /// Item of an ordered list
    ListNumber,
    /// Body text
    Normal,
}

impl ParagraphKind {
    /// Check if this is one of the heading styles (title included).
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            ParagraphKind::Title
                | ParagraphKind::Heading1
                | ParagraphKind::Heading2
                | ParagraphKind::Heading3
        )
    }

    /// Check if this is a list item style.
    pub fn is_list_item(&self) -> bool {
        matches!(self, ParagraphKind::ListBullet | ParagraphKind::ListNumber)
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A clickable run pointing at an external URL
    Hyperlink {
        /// Visible run
        run: TextRun,
        /// Link target
        url: String,
    },
}

impl InlineContent {
    /// Visible text of this content.
    pub fn text(&self) -> &str {
        match self {
            InlineContent::Text(run) | InlineContent::Hyperlink { run, .. } => &run.text,
        }
    }

    /// Target URL if this is a hyperlink.
    pub fn url(&self) -> Option<&str> {
        match self {
            InlineContent::Hyperlink { url, .. } => Some(url),
            InlineContent::Text(_) => None,
        }
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Create a monospace run.
    pub fn monospace(text: impl Into<String>, font: impl Into<String>, size_pt: f32) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                font_name: Some(font.into()),
                font_size: Some(size_pt),
                ..Default::default()
            },
        }
    }

    /// Create an underlined, colored run for hyperlinks.
    pub fn link(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                underline: true,
                color: Some(color.into()),
                ..Default::default()
            },
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Text color (RGB hex, e.g., "0563C1")
    pub color: Option<String>,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.font_name.is_some()
            || self.font_size.is_some()
            || self.color.is_some()
    }
}
