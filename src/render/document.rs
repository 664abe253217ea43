//! Rich-document rendering: element tree to styled paragraphs.

use crate::model::{
    Element, InlineSpan, ListKind, OutputDocument, Paragraph, ParagraphKind, TextRun,
};

use super::pagination::nfc;
use super::{RenderOptions, RenderResult, RenderStats};

/// Render elements into a styled document (no pagination).
pub fn to_document(elements: &[Element], options: &RenderOptions) -> OutputDocument {
    DocumentRenderer::new(options.clone()).render(elements)
}

/// Render elements into a styled document and collect statistics.
pub fn to_document_with_stats(elements: &[Element], options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    DocumentRenderer::new(options).render_with_stats(elements)
}

/// Maps each element to one or more paragraphs, strictly in input order.
pub struct DocumentRenderer {
    options: RenderOptions,
    title_marker: String,
    stats: RenderStats,
}

impl DocumentRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        let title_marker = nfc(&options.title_marker);
        Self {
            options,
            title_marker,
            stats: RenderStats::new(),
        }
    }

    /// Render elements into a document.
    pub fn render(mut self, elements: &[Element]) -> OutputDocument {
        self.render_internal(elements)
    }

    /// Render elements and return the document with statistics.
    pub fn render_with_stats(mut self, elements: &[Element]) -> RenderResult {
        self.options.collect_stats = true;
        let document = self.render_internal(elements);
        RenderResult::new(document, self.stats)
    }

    fn render_internal(&mut self, elements: &[Element]) -> OutputDocument {
        let mut doc = OutputDocument::new(self.options.styles.clone());
        for element in elements {
            self.render_element(&mut doc, element);
        }
        log::debug!(
            "Rendered {} elements into {} paragraphs",
            elements.len(),
            doc.paragraph_count()
        );
        doc
    }

    fn render_element(&mut self, doc: &mut OutputDocument, element: &Element) {
        match element {
            Element::Heading { level, text } => {
                let kind = self.heading_kind(*level, text);
                if self.options.collect_stats {
                    self.stats.add_heading();
                }
                doc.add_paragraph(Paragraph::with_text(kind, text.clone()));
            }
            Element::CodeBlock { text, .. } => {
                for line in text.lines().filter(|line| !line.trim().is_empty()) {
                    if self.options.collect_stats {
                        self.stats.add_code_line();
                    }
                    doc.add_paragraph(Paragraph::with_text(ParagraphKind::CodeLine, line));
                }
            }
            Element::Paragraph { spans, .. } => {
                if self.options.collect_stats {
                    self.stats.add_paragraph();
                }
                let paragraph = self.render_spans(spans);
                doc.add_paragraph(paragraph);
            }
            Element::List { kind, items } => {
                let style = match kind {
                    ListKind::Unordered => ParagraphKind::ListBullet,
                    ListKind::Ordered => ParagraphKind::ListNumber,
                };
                for item in items {
                    if self.options.collect_stats {
                        self.stats.add_list_item();
                    }
                    doc.add_paragraph(Paragraph::with_text(style, item.text.clone()));
                }
            }
            Element::Rule => {
                if self.options.collect_stats {
                    self.stats.add_horizontal_rule();
                }
                doc.add_paragraph(Paragraph::with_text(
                    ParagraphKind::Normal,
                    self.options.rule_text(),
                ));
            }
        }
    }

    /// Level 4 shares the level 3 style; there is no separate Heading4.
    fn heading_kind(&self, level: u8, text: &str) -> ParagraphKind {
        match level {
            1 if !self.title_marker.is_empty() && nfc(text).contains(&self.title_marker) => {
                ParagraphKind::Title
            }
            1 => ParagraphKind::Heading1,
            2 => ParagraphKind::Heading2,
            _ => ParagraphKind::Heading3,
        }
    }

    fn render_spans(&mut self, spans: &[InlineSpan]) -> Paragraph {
        let styles = &self.options.styles;
        let mut paragraph = Paragraph::new(ParagraphKind::Normal);

        for span in spans {
            match span {
                InlineSpan::Code { text } => paragraph.add_run(TextRun::monospace(
                    text.clone(),
                    styles.inline_code_font.clone(),
                    styles.inline_code_size_pt,
                )),
                InlineSpan::Bold { text } => paragraph.add_run(TextRun::bold(text.clone())),
                InlineSpan::Italic { text } => paragraph.add_run(TextRun::italic(text.clone())),
                InlineSpan::Link { text, href } if is_web_url(href) => {
                    if self.options.collect_stats {
                        self.stats.add_hyperlink();
                    }
                    paragraph.add_hyperlink(
                        TextRun::link(text.clone(), styles.hyperlink_color.clone()),
                        href.clone(),
                    );
                }
                InlineSpan::Link { text, .. } | InlineSpan::Text { text } => {
                    paragraph.add_text(text.clone())
                }
            }
        }

        paragraph
    }
}

/// Only `http`-prefixed targets become hyperlinks.
pub fn is_web_url(href: &str) -> bool {
    href.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Block, InlineContent, ListItem};

    fn render(elements: &[Element]) -> OutputDocument {
        to_document(elements, &RenderOptions::default())
    }

    #[test]
    fn test_title_heading() {
        let doc = render(&[
            Element::heading(1, "🚀 HƯỚNG DẪN DEPLOY THEME EDITOR LÊN VPS"),
            Element::heading(1, "Overview"),
        ]);
        let kinds: Vec<_> = doc.paragraphs().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![ParagraphKind::Title, ParagraphKind::Heading1]);
        assert_eq!(doc.styles.title.alignment, Alignment::Center);
    }

    #[test]
    fn test_heading_levels_map_to_styles() {
        let doc = render(&[
            Element::heading(2, "Two"),
            Element::heading(3, "Three"),
            Element::heading(4, "Four"),
        ]);
        let kinds: Vec<_> = doc.paragraphs().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ParagraphKind::Heading2,
                ParagraphKind::Heading3,
                ParagraphKind::Heading3
            ]
        );
    }

    #[test]
    fn test_code_block_drops_blank_lines() {
        let doc = render(&[Element::code_block(
            Some("bash".to_string()),
            "cd /var/www\n\n   \n  npm run build\n",
        )]);
        let lines: Vec<_> = doc.paragraphs().map(|p| p.plain_text()).collect();
        assert_eq!(lines, vec!["cd /var/www", "  npm run build"]);
        assert_eq!(doc.count_kind(ParagraphKind::CodeLine), 2);
    }

    #[test]
    fn test_paragraph_runs() {
        let doc = render(&[Element::paragraph(vec![
            InlineSpan::plain("Hello "),
            InlineSpan::bold("world"),
            InlineSpan::plain("."),
        ])]);
        let p = doc.paragraphs().next().unwrap();
        let runs: Vec<_> = p.runs().map(|r| (r.text.as_str(), r.style.bold)).collect();
        assert_eq!(runs, vec![("Hello ", false), ("world", true), (".", false)]);
    }

    #[test]
    fn test_inline_code_run() {
        let doc = render(&[Element::paragraph(vec![InlineSpan::code("pm2 logs")])]);
        let run = doc.paragraphs().next().unwrap().runs().next().unwrap().clone();
        assert_eq!(run.style.font_name.as_deref(), Some("Consolas"));
        assert_eq!(run.style.font_size, Some(10.0));
    }

    #[test]
    fn test_links() {
        let doc = render(&[Element::paragraph(vec![
            InlineSpan::link("Next.js", "https://nextjs.org/docs"),
            InlineSpan::link("mail us", "mailto:ops@example.com"),
            InlineSpan::link("readme", "./README.md"),
        ])]);
        let p = doc.paragraphs().next().unwrap();

        match &p.content[0] {
            InlineContent::Hyperlink { run, url } => {
                assert_eq!(url, "https://nextjs.org/docs");
                assert!(run.style.underline);
                assert_eq!(run.style.color.as_deref(), Some("0563C1"));
            }
            other => panic!("Expected hyperlink, got {:?}", other),
        }
        for content in &p.content[1..] {
            assert!(content.url().is_none());
        }
        assert_eq!(p.content[1].text(), "mail us");
        assert_eq!(p.content[2].text(), "readme");
    }

    #[test]
    fn test_lists_and_rule() {
        let doc = render(&[
            Element::List {
                kind: ListKind::Unordered,
                items: vec![ListItem::new("a"), ListItem::new("b")],
            },
            Element::List {
                kind: ListKind::Ordered,
                items: vec![ListItem::new("first")],
            },
            Element::Rule,
        ]);
        let kinds: Vec<_> = doc.paragraphs().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ParagraphKind::ListBullet,
                ParagraphKind::ListBullet,
                ParagraphKind::ListNumber,
                ParagraphKind::Normal
            ]
        );
        let Some(Block::Paragraph(rule)) = doc.blocks.last() else {
            panic!("Expected rule paragraph");
        };
        assert_eq!(rule.plain_text(), "─".repeat(50));
    }

    #[test]
    fn test_stats() {
        let result = to_document_with_stats(
            &[
                Element::heading(1, "T"),
                Element::code_block(None, "a\nb\n"),
                Element::paragraph(vec![InlineSpan::link("x", "https://x.io")]),
            ],
            &RenderOptions::default(),
        );
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.code_line_count, 2);
        assert_eq!(result.stats.hyperlink_count, 1);
        assert_eq!(result.document.paragraph_count(), 4);
    }
}
