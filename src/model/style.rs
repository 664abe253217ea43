//! Paragraph style definitions.

use serde::{Deserialize, Serialize};

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// WordprocessingML `w:jc` value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// A named paragraph style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// Style identifier used in the document part
    pub id: String,

    /// Display name shown in Word's style gallery
    pub name: String,

    /// Font family
    pub font: String,

    /// Font size in points
    pub size_pt: f32,

    /// Bold text
    pub bold: bool,

    /// Paragraph alignment
    pub alignment: Alignment,

    /// Space before paragraph in points
    pub space_before_pt: f32,

    /// Space after paragraph in points
    pub space_after_pt: f32,

    /// Left indent in inches
    pub left_indent_in: f32,
}

impl StyleDefinition {
    /// Create a style with the given id, font and size; everything else default.
    pub fn new(id: impl Into<String>, font: impl Into<String>, size_pt: f32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            font: font.into(),
            size_pt,
            bold: false,
            alignment: Alignment::Left,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            left_indent_in: 0.0,
        }
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Make the style bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set spacing before and after, in points.
    pub fn spaced(mut self, before_pt: f32, after_pt: f32) -> Self {
        self.space_before_pt = before_pt;
        self.space_after_pt = after_pt;
        self
    }

    /// Set the left indent, in inches.
    pub fn indented(mut self, inches: f32) -> Self {
        self.left_indent_in = inches;
        self
    }
}

/// The fixed set of styles used by the renderer.
///
/// Built once and passed by reference; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Document title (centered, largest)
    pub title: StyleDefinition,

    /// Level 1 heading
    pub heading1: StyleDefinition,

    /// Level 2 heading
    pub heading2: StyleDefinition,

    /// Level 3 and 4 headings
    pub heading3: StyleDefinition,

    /// One line of a code block
    pub code_line: StyleDefinition,

    /// Font of body text (the Normal style)
    pub body_font: String,

    /// Size of body text in points
    pub body_size_pt: f32,

    /// Font for inline code runs
    pub inline_code_font: String,

    /// Size of inline code runs in points
    pub inline_code_size_pt: f32,

    /// Hyperlink color (RGB hex, no leading '#')
    pub hyperlink_color: String,

    /// Page margin on all sides, in inches
    pub page_margin_in: f32,
}

impl StyleSheet {
    /// Create the default style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the paragraph styles in definition order.
    pub fn paragraph_styles(&self) -> impl Iterator<Item = &StyleDefinition> {
        [
            &self.title,
            &self.heading1,
            &self.heading2,
            &self.heading3,
            &self.code_line,
        ]
        .into_iter()
    }

    /// Replace the title style.
    pub fn with_title(mut self, style: StyleDefinition) -> Self {
        self.title = style;
        self
    }

    /// Replace the code line style.
    pub fn with_code_line(mut self, style: StyleDefinition) -> Self {
        self.code_line = style;
        self
    }

    /// Set the hyperlink color.
    pub fn with_hyperlink_color(mut self, color: impl Into<String>) -> Self {
        self.hyperlink_color = color.into();
        self
    }

    /// Set the page margin.
    pub fn with_page_margin(mut self, inches: f32) -> Self {
        self.page_margin_in = inches;
        self
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: StyleDefinition::new("CustomTitle", "Arial", 24.0)
                .named("Custom Title")
                .bold()
                .aligned(Alignment::Center)
                .spaced(0.0, 18.0),
            heading1: StyleDefinition::new("CustomH1", "Arial", 18.0)
                .named("Custom H1")
                .bold()
                .spaced(18.0, 12.0),
            heading2: StyleDefinition::new("CustomH2", "Arial", 16.0)
                .named("Custom H2")
                .bold()
                .spaced(12.0, 6.0),
            heading3: StyleDefinition::new("CustomH3", "Arial", 14.0)
                .named("Custom H3")
                .bold()
                .spaced(6.0, 6.0),
            code_line: StyleDefinition::new("CustomCode", "Consolas", 10.0)
                .named("Custom Code")
                .spaced(6.0, 6.0)
                .indented(0.5),
            body_font: "Calibri".to_string(),
            body_size_pt: 11.0,
            inline_code_font: "Consolas".to_string(),
            inline_code_size_pt: 10.0,
            hyperlink_color: "0563C1".to_string(),
            page_margin_in: 1.0,
        }
    }
}

/// Points to twentieths of a point (twips).
pub fn pt_to_twips(pt: f32) -> u32 {
    (pt * 20.0).round().max(0.0) as u32
}

/// Points to half-points, the unit of `w:sz`.
pub fn pt_to_half_points(pt: f32) -> u32 {
    (pt * 2.0).round().max(0.0) as u32
}

/// Inches to twips.
pub fn inches_to_twips(inches: f32) -> u32 {
    (inches * 1440.0).round().max(0.0) as u32
}
