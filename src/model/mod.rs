//! Document model types.
//!
//! Two representations live here: the [`Element`] tree produced by the
//! Markdown parser, and the [`OutputDocument`] of styled paragraphs produced
//! by the rich-document renderer and consumed by the DOCX writer.

mod document;
mod element;
mod paragraph;
mod style;

pub use document::{Block, OutputDocument};
pub use element::{Element, InlineSpan, ListItem, ListKind};
pub use paragraph::{InlineContent, Paragraph, ParagraphKind, TextRun, TextStyle};
pub use style::{
    inches_to_twips, pt_to_half_points, pt_to_twips, Alignment, StyleDefinition, StyleSheet,
};
