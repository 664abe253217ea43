//! Document-level types.

use super::{Paragraph, ParagraphKind, StyleSheet};
use serde::{Deserialize, Serialize};

/// A rendered rich document, ready for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDocument {
    /// Style sheet the paragraphs refer to
    pub styles: StyleSheet,

    /// Blocks in output order
    pub blocks: Vec<Block>,
}

impl OutputDocument {
    /// Create a new empty document.
    pub fn new(styles: StyleSheet) -> Self {
        Self {
            styles,
            blocks: Vec::new(),
        }
    }

    /// Add a paragraph to the end of the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Insert a page break before the block at `index`.
    pub fn insert_page_break(&mut self, index: usize) {
        self.blocks.insert(index, Block::PageBreak);
    }

    /// Iterate over the paragraphs, skipping page breaks.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::PageBreak => None,
        })
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Get the number of page breaks.
    pub fn page_break_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }

    /// Count paragraphs rendered under the given style.
    pub fn count_kind(&self, kind: ParagraphKind) -> usize {
        self.paragraphs().filter(|p| p.kind == kind).count()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new(StyleSheet::default())
    }
}

/// A content block in the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A styled paragraph
    Paragraph(Paragraph),

    /// A hard page break
    PageBreak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = OutputDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_page_break_insertion() {
        let mut doc = OutputDocument::default();
        doc.add_paragraph(Paragraph::with_text(ParagraphKind::Heading1, "Intro"));
        doc.add_paragraph(Paragraph::with_text(ParagraphKind::Normal, "Body"));
        doc.insert_page_break(1);

        assert_eq!(doc.page_break_count(), 1);
        assert_eq!(doc.paragraph_count(), 2);
        assert!(matches!(doc.blocks[1], Block::PageBreak));
        assert_eq!(doc.plain_text(), "Intro\nBody");
    }

    #[test]
    fn test_count_kind() {
        let mut doc = OutputDocument::default();
        doc.add_paragraph(Paragraph::with_text(ParagraphKind::CodeLine, "a"));
        doc.add_paragraph(Paragraph::with_text(ParagraphKind::CodeLine, "b"));
        doc.add_paragraph(Paragraph::with_text(ParagraphKind::Normal, "c"));
        assert_eq!(doc.count_kind(ParagraphKind::CodeLine), 2);
    }
}
