//! Section pagination pass.
//!
//! Runs over a finished [`OutputDocument`] and inserts a page break before
//! paragraphs that open one of the known sections. In the default
//! [`PaginationMode::FirstMatch`] mode only the first matching paragraph gets
//! a break and the scan stops there.

use unicode_normalization::UnicodeNormalization;

use crate::model::{Block, OutputDocument};

use super::{PaginationMode, RenderOptions};

/// Inserts page breaks before known section titles.
#[derive(Debug, Clone)]
pub struct SectionPaginator {
    titles: Vec<String>,
    mode: PaginationMode,
}

impl SectionPaginator {
    /// Create a paginator for the given titles.
    pub fn new<I, S>(titles: I, mode: PaginationMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            titles: titles
                .into_iter()
                .map(|t| nfc(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
            mode,
        }
    }

    /// Create a paginator from render options.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(&options.section_titles, options.pagination)
    }

    /// Check if a paragraph text opens a known section.
    pub fn matches(&self, text: &str) -> bool {
        let text = nfc(text);
        self.titles.iter().any(|title| text.contains(title.as_str()))
    }

    /// Insert page breaks into the document; returns how many were inserted.
    pub fn apply(&self, doc: &mut OutputDocument) -> usize {
        if self.mode == PaginationMode::Disabled {
            return 0;
        }

        let targets: Vec<usize> = doc
            .blocks
            .iter()
            .enumerate()
            .filter_map(|(i, block)| match block {
                Block::Paragraph(p) if self.matches(&p.plain_text()) => Some(i),
                _ => None,
            })
            .collect();

        let targets = match self.mode {
            PaginationMode::FirstMatch => &targets[..targets.len().min(1)],
            _ => &targets[..],
        };

        // Insert back to front so earlier indices stay valid.
        let mut inserted = 0;
        for &index in targets.iter().rev() {
            if index > 0 && matches!(doc.blocks[index - 1], Block::PageBreak) {
                continue;
            }
            doc.insert_page_break(index);
            inserted += 1;
        }

        log::debug!("Pagination inserted {} page break(s)", inserted);
        inserted
    }
}

/// Apply section pagination with the given options.
pub fn paginate(doc: &mut OutputDocument, options: &RenderOptions) -> usize {
    SectionPaginator::from_options(options).apply(doc)
}

/// NFC-normalize text so precomposed and decomposed Vietnamese compare equal.
pub(crate) fn nfc(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, ParagraphKind};
    use crate::render::DEFAULT_SECTION_TITLES;

    fn doc_with(texts: &[&str]) -> OutputDocument {
        let mut doc = OutputDocument::default();
        for text in texts {
            doc.add_paragraph(Paragraph::with_text(ParagraphKind::Normal, *text));
        }
        doc
    }

    fn break_positions(doc: &OutputDocument) -> Vec<usize> {
        doc.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| matches!(b, Block::PageBreak))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_single_match() {
        let mut doc = doc_with(&["Intro", "1. CHUẨN BỊ VPS", "Body"]);
        let inserted = paginate(&mut doc, &RenderOptions::default());

        assert_eq!(inserted, 1);
        assert_eq!(break_positions(&doc), vec![1]);
        let Block::Paragraph(ref p) = doc.blocks[2] else {
            panic!("Expected paragraph after break");
        };
        assert_eq!(p.plain_text(), "1. CHUẨN BỊ VPS");
    }

    #[test]
    fn test_no_match() {
        let mut doc = doc_with(&["Intro", "Body"]);
        assert_eq!(paginate(&mut doc, &RenderOptions::default()), 0);
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_two_matches_first_only() {
        let mut doc = doc_with(&["Intro", "SSL CERTIFICATE", "Body", "DATABASE SETUP"]);
        let inserted = paginate(&mut doc, &RenderOptions::default());

        assert_eq!(inserted, 1);
        assert_eq!(break_positions(&doc), vec![1]);
    }

    #[test]
    fn test_every_match_mode() {
        let mut doc = doc_with(&["Intro", "SSL CERTIFICATE", "Body", "DATABASE SETUP"]);
        let options = RenderOptions::default().with_pagination(PaginationMode::EveryMatch);
        let inserted = paginate(&mut doc, &options);

        assert_eq!(inserted, 2);
        assert_eq!(break_positions(&doc), vec![1, 4]);
    }

    #[test]
    fn test_disabled_mode() {
        let mut doc = doc_with(&["SSL CERTIFICATE"]);
        let options = RenderOptions::default().with_pagination(PaginationMode::Disabled);
        assert_eq!(paginate(&mut doc, &options), 0);
    }

    #[test]
    fn test_decomposed_text_matches() {
        let decomposed: String = "CẤU HÌNH NGINX".nfd().collect();
        let paginator = SectionPaginator::new(DEFAULT_SECTION_TITLES, PaginationMode::FirstMatch);
        assert!(paginator.matches(&decomposed));
    }

    #[test]
    fn test_repeated_pass_does_not_double_break() {
        let mut doc = doc_with(&["Intro", "DEPLOY ỨNG DỤNG"]);
        let options = RenderOptions::default();
        assert_eq!(paginate(&mut doc, &options), 1);
        assert_eq!(paginate(&mut doc, &options), 0);
        assert_eq!(doc.page_break_count(), 1);
    }
}
