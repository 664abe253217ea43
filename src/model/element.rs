//! Parsed Markdown elements.

use serde::{Deserialize, Serialize};

/// A block-level element produced by the Markdown parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A heading (level 1-4)
    Heading {
        /// Heading level, clamped to 1..=4
        level: u8,
        /// Plain text of the heading
        text: String,
    },

    /// A paragraph with inline spans
    Paragraph {
        /// Plain text of the paragraph
        text: String,
        /// Inline spans in source order
        spans: Vec<InlineSpan>,
    },

    /// A fenced or indented code block
    CodeBlock {
        /// Info-string language tag, if any
        language: Option<String>,
        /// Raw code text
        text: String,
    },

    /// An ordered or unordered list
    List {
        /// List kind
        kind: ListKind,
        /// Direct children
        items: Vec<ListItem>,
    },

    /// A thematic break
    Rule,
}

impl Element {
    /// Create a heading, clamping the level into the supported range.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Element::Heading {
            level: level.clamp(1, 4),
            text: text.into(),
        }
    }

    /// Create a paragraph from spans, deriving its plain text.
    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        let text = spans.iter().map(InlineSpan::text).collect();
        Element::Paragraph { text, spans }
    }

    /// Create a code block.
    pub fn code_block(language: Option<String>, text: impl Into<String>) -> Self {
        Element::CodeBlock {
            language,
            text: text.into(),
        }
    }

    /// Plain text content of the element.
    pub fn plain_text(&self) -> String {
        match self {
            Element::Heading { text, .. }
            | Element::Paragraph { text, .. }
            | Element::CodeBlock { text, .. } => text.clone(),
            Element::List { items, .. } => items
                .iter()
                .map(|item| item.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Element::Rule => String::new(),
        }
    }

    /// Short kind name, used in logs and statistics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Heading { .. } => "heading",
            Element::Paragraph { .. } => "paragraph",
            Element::CodeBlock { .. } => "code_block",
            Element::List { .. } => "list",
            Element::Rule => "rule",
        }
    }
}

/// An inline span within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Unformatted text
    Text { text: String },

    /// Strong emphasis
    Bold { text: String },

    /// Emphasis
    Italic { text: String },

    /// Inline code
    Code { text: String },

    /// A link with its target
    Link { text: String, href: String },
}

impl InlineSpan {
    /// Text content of the span.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text { text }
            | InlineSpan::Bold { text }
            | InlineSpan::Italic { text }
            | InlineSpan::Code { text }
            | InlineSpan::Link { text, .. } => text,
        }
    }

    /// Create a plain text span.
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan::Text { text: text.into() }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        InlineSpan::Bold { text: text.into() }
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        InlineSpan::Italic { text: text.into() }
    }

    /// Create an inline code span.
    pub fn code(text: impl Into<String>) -> Self {
        InlineSpan::Code { text: text.into() }
    }

    /// Create a link span.
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        InlineSpan::Link {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// List kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Numbered list
    Ordered,
    /// Bulleted list
    Unordered,
}

/// A single list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// All text within the item, nested lists included
    pub text: String,
}

impl ListItem {
    /// Create a new list item.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
