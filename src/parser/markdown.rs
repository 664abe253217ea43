//! Markdown parser built on pulldown-cmark.
//!
//! pulldown-cmark does the actual parsing; this module folds its event stream
//! into the flat [`Element`] vocabulary the renderer understands. Anything the
//! vocabulary has no slot for degrades to plain paragraph text, so parsing
//! never fails.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Parser, Tag};

use crate::model::{Element, InlineSpan, ListItem, ListKind};

use super::ParseOptions;

/// Parse Markdown text with default options.
pub fn parse_markdown(markdown: &str) -> Vec<Element> {
    MarkdownParser::new().parse(markdown)
}

/// Markdown to element-tree parser.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    options: ParseOptions,
}

impl MarkdownParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse Markdown text into elements, in source order.
    pub fn parse(&self, markdown: &str) -> Vec<Element> {
        let mut builder = ElementBuilder::new(self.options.max_heading_level);
        for event in Parser::new_ext(markdown, self.options.cmark_options()) {
            builder.handle(event);
        }
        let elements = builder.finish();
        log::debug!("Parsed {} elements", elements.len());
        elements
    }
}

/// Leaf block currently being collected outside of lists and tables.
enum BlockState {
    Heading { level: u8, text: String },
    Paragraph(InlineCollector),
    Code { language: Option<String>, text: String },
}

/// Top-level list being collected. Nested lists fold into the current item.
struct ListState {
    kind: ListKind,
    depth: usize,
    items: Vec<ListItem>,
    current: Option<String>,
}

impl ListState {
    fn push_text(&mut self, text: &str) {
        if let Some(ref mut current) = self.current {
            current.push_str(text);
        }
    }

    fn push_separator(&mut self) {
        if let Some(ref mut current) = self.current {
            if !current.is_empty() && !current.ends_with('\n') {
                current.push('\n');
            }
        }
    }
}

#[derive(Default)]
struct TableState {
    row: Vec<String>,
    cell: String,
}

struct ElementBuilder {
    elements: Vec<Element>,
    block: Option<BlockState>,
    list: Option<ListState>,
    table: Option<TableState>,
    max_heading_level: u8,
}

impl ElementBuilder {
    fn new(max_heading_level: u8) -> Self {
        Self {
            elements: Vec::new(),
            block: None,
            list: None,
            table: None,
            max_heading_level,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        if self.list.is_some() {
            self.handle_list_event(event);
        } else if self.table.is_some() {
            self.handle_table_event(event);
        } else {
            self.handle_block_event(event);
        }
    }

    fn handle_block_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                let level = (level as u8).min(self.max_heading_level);
                self.block = Some(BlockState::Heading {
                    level,
                    text: String::new(),
                });
            }
            Event::Start(Tag::Paragraph) => {
                self.block = Some(BlockState::Paragraph(InlineCollector::default()));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(|lang| lang.to_string()),
                    CodeBlockKind::Indented => None,
                };
                self.block = Some(BlockState::Code {
                    language,
                    text: String::new(),
                });
            }
            Event::Start(Tag::List(start)) => {
                let kind = if start.is_some() {
                    ListKind::Ordered
                } else {
                    ListKind::Unordered
                };
                self.list = Some(ListState {
                    kind,
                    depth: 1,
                    items: Vec::new(),
                    current: None,
                });
            }
            Event::Start(Tag::Table(_)) => {
                self.table = Some(TableState::default());
            }
            Event::End(Tag::Heading(..))
            | Event::End(Tag::Paragraph)
            | Event::End(Tag::CodeBlock(_)) => {
                self.close_block();
            }
            Event::Rule => self.elements.push(Element::Rule),
            Event::Html(html) => {
                log::warn!("Dropping raw HTML: {}", html.trim());
            }
            event => self.handle_inline_event(event),
        }
    }

    fn handle_inline_event(&mut self, event: Event<'_>) {
        match self.block {
            Some(BlockState::Heading { ref mut text, .. }) => match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                _ => {}
            },
            Some(BlockState::Code { ref mut text, .. }) => {
                if let Event::Text(t) = event {
                    text.push_str(&t);
                }
            }
            Some(BlockState::Paragraph(ref mut collector)) => collector.handle(event),
            None => {
                // Stray inline content (e.g. inside an HTML block) becomes its own paragraph.
                if let Event::Text(t) = event {
                    if !t.trim().is_empty() {
                        self.elements
                            .push(Element::paragraph(vec![InlineSpan::plain(t.to_string())]));
                    }
                }
            }
        }
    }

    fn close_block(&mut self) {
        match self.block.take() {
            Some(BlockState::Heading { level, text }) => {
                self.elements.push(Element::heading(level, text.trim()));
            }
            Some(BlockState::Paragraph(collector)) => {
                let spans = collector.finish();
                if !spans.is_empty() {
                    self.elements.push(Element::paragraph(spans));
                }
            }
            Some(BlockState::Code { language, text }) => {
                self.elements.push(Element::code_block(language, text));
            }
            None => {}
        }
    }

    fn handle_list_event(&mut self, event: Event<'_>) {
        let Some(list) = self.list.as_mut() else {
            return;
        };

        match event {
            Event::Start(Tag::List(_)) => {
                list.depth += 1;
                list.push_separator();
            }
            Event::End(Tag::List(_)) => {
                list.depth -= 1;
                if list.depth == 0 {
                    if let Some(list) = self.list.take() {
                        self.elements.push(Element::List {
                            kind: list.kind,
                            items: list.items,
                        });
                    }
                }
            }
            Event::Start(Tag::Item) => {
                if list.depth == 1 {
                    list.current = Some(String::new());
                } else {
                    list.push_separator();
                }
            }
            Event::End(Tag::Item) => {
                if list.depth == 1 {
                    if let Some(text) = list.current.take() {
                        list.items.push(ListItem::new(text.trim()));
                    }
                }
            }
            Event::Start(Tag::Paragraph) | Event::Start(Tag::CodeBlock(_)) => {
                list.push_separator();
            }
            Event::Start(Tag::Image(..)) => {}
            Event::Text(t) | Event::Code(t) => list.push_text(&t),
            Event::SoftBreak | Event::HardBreak => list.push_text("\n"),
            _ => {}
        }
    }

    fn handle_table_event(&mut self, event: Event<'_>) {
        let Some(table) = self.table.as_mut() else {
            return;
        };

        match event {
            Event::End(Tag::TableCell) => {
                let cell = std::mem::take(&mut table.cell);
                table.row.push(cell.trim().to_string());
            }
            Event::End(Tag::TableHead) | Event::End(Tag::TableRow) => {
                let row = std::mem::take(&mut table.row);
                if row.iter().any(|cell| !cell.is_empty()) {
                    let line = row.join(" | ");
                    self.elements
                        .push(Element::paragraph(vec![InlineSpan::plain(line)]));
                }
            }
            Event::End(Tag::Table(_)) => {
                self.table = None;
            }
            Event::Text(t) | Event::Code(t) => table.cell.push_str(&t),
            Event::SoftBreak | Event::HardBreak => table.cell.push(' '),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Element> {
        self.close_block();
        if let Some(list) = self.list.take() {
            let mut items = list.items;
            if let Some(text) = list.current {
                items.push(ListItem::new(text.trim()));
            }
            self.elements.push(Element::List {
                kind: list.kind,
                items,
            });
        }
        self.elements
    }
}

/// Kind of the top-level inline span currently open in a paragraph.
enum OpenKind {
    Bold,
    Italic,
    Link(String),
    Plain,
}

struct OpenSpan {
    kind: OpenKind,
    text: String,
    depth: usize,
}

/// Folds a paragraph's inline events into top-level spans.
///
/// Only the outermost formatting is kept: `**bold *and italic***` is one bold
/// span. Text between spans is kept verbatim, but whitespace-only gaps are
/// dropped.
#[derive(Default)]
struct InlineCollector {
    spans: Vec<InlineSpan>,
    plain: String,
    open: Option<OpenSpan>,
}

impl InlineCollector {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(t) => self.push_text(&t),
            Event::Code(t) => {
                if let Some(ref mut open) = self.open {
                    open.text.push_str(&t);
                } else {
                    self.flush_plain();
                    self.spans.push(InlineSpan::code(t.to_string()));
                }
            }
            Event::SoftBreak | Event::HardBreak => self.push_text("\n"),
            Event::Html(_) | Event::FootnoteReference(_) | Event::TaskListMarker(_) => {}
            Event::Rule => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        if let Some(ref mut open) = self.open {
            open.depth += 1;
            return;
        }

        let kind = match tag {
            Tag::Strong => OpenKind::Bold,
            Tag::Emphasis => OpenKind::Italic,
            Tag::Link(_, dest, _) => OpenKind::Link(cow_to_string(dest)),
            _ => OpenKind::Plain,
        };
        self.flush_plain();
        self.open = Some(OpenSpan {
            kind,
            text: String::new(),
            depth: 1,
        });
    }

    fn end(&mut self, _tag: Tag<'_>) {
        let Some(ref mut open) = self.open else {
            return;
        };
        open.depth -= 1;
        if open.depth > 0 {
            return;
        }
        if let Some(open) = self.open.take() {
            self.close(open);
        }
    }

    fn close(&mut self, open: OpenSpan) {
        let span = match open.kind {
            OpenKind::Bold => InlineSpan::bold(open.text),
            OpenKind::Italic => InlineSpan::italic(open.text),
            OpenKind::Link(href) => InlineSpan::link(open.text, href),
            OpenKind::Plain => {
                if open.text.trim().is_empty() {
                    return;
                }
                InlineSpan::plain(open.text)
            }
        };
        self.spans.push(span);
    }

    fn push_text(&mut self, text: &str) {
        match self.open {
            Some(ref mut open) => open.text.push_str(text),
            None => self.plain.push_str(text),
        }
    }

    fn flush_plain(&mut self) {
        let plain = std::mem::take(&mut self.plain);
        if !plain.trim().is_empty() {
            self.spans.push(InlineSpan::plain(plain));
        }
    }

    fn finish(mut self) -> Vec<InlineSpan> {
        if let Some(open) = self.open.take() {
            self.close(open);
        }
        self.flush_plain();
        self.spans
    }
}

fn cow_to_string(cow: CowStr<'_>) -> String {
    cow.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let elements = parse_markdown("# One\n\n## Two\n\n#### Four\n\n###### Six\n");
        assert_eq!(
            elements,
            vec![
                Element::heading(1, "One"),
                Element::heading(2, "Two"),
                Element::heading(4, "Four"),
                Element::heading(4, "Six"),
            ]
        );
    }

    #[test]
    fn test_paragraph_spans() {
        let elements = parse_markdown("Hello **world**.\n");
        assert_eq!(
            elements,
            vec![Element::paragraph(vec![
                InlineSpan::plain("Hello "),
                InlineSpan::bold("world"),
                InlineSpan::plain("."),
            ])]
        );
    }

    #[test]
    fn test_whitespace_gap_dropped() {
        let elements = parse_markdown("**a** *b*\n");
        assert_eq!(
            elements,
            vec![Element::paragraph(vec![
                InlineSpan::bold("a"),
                InlineSpan::italic("b"),
            ])]
        );
    }

    #[test]
    fn test_nested_formatting_flattened() {
        let elements = parse_markdown("**bold *and italic***\n");
        assert_eq!(
            elements,
            vec![Element::paragraph(vec![InlineSpan::bold("bold and italic")])]
        );
    }

    #[test]
    fn test_inline_code_and_links() {
        let elements = parse_markdown(
            "Run `npm ci` then see [docs](https://nextjs.org) or [mail](mailto:a@b.c).\n",
        );
        let Element::Paragraph { spans, .. } = &elements[0] else {
            panic!("Expected paragraph");
        };
        assert_eq!(spans[1], InlineSpan::code("npm ci"));
        assert_eq!(spans[3], InlineSpan::link("docs", "https://nextjs.org"));
        assert_eq!(spans[5], InlineSpan::link("mail", "mailto:a@b.c"));
    }

    #[test]
    fn test_code_block() {
        let elements = parse_markdown("```bash\nsudo apt update\n\nsudo apt upgrade\n```\n");
        assert_eq!(
            elements,
            vec![Element::code_block(
                Some("bash".to_string()),
                "sudo apt update\n\nsudo apt upgrade\n"
            )]
        );
    }

    #[test]
    fn test_lists() {
        let elements = parse_markdown("- one\n- two\n  - nested\n\n1. first\n2. second\n");
        assert_eq!(
            elements,
            vec![
                Element::List {
                    kind: ListKind::Unordered,
                    items: vec![ListItem::new("one"), ListItem::new("two\nnested")],
                },
                Element::List {
                    kind: ListKind::Ordered,
                    items: vec![ListItem::new("first"), ListItem::new("second")],
                },
            ]
        );
    }

    #[test]
    fn test_rule_and_blockquote() {
        let elements = parse_markdown("---\n\n> quoted\n");
        assert_eq!(
            elements,
            vec![
                Element::Rule,
                Element::paragraph(vec![InlineSpan::plain("quoted")]),
            ]
        );
    }

    #[test]
    fn test_table_rows_become_paragraphs() {
        let elements = parse_markdown("| Port | Service |\n|---|---|\n| 80 | nginx |\n");
        assert_eq!(
            elements,
            vec![
                Element::paragraph(vec![InlineSpan::plain("Port | Service")]),
                Element::paragraph(vec![InlineSpan::plain("80 | nginx")]),
            ]
        );
    }

    #[test]
    fn test_malformed_degrades_to_paragraph() {
        let elements = parse_markdown("**unclosed bold and `tick\n");
        assert_eq!(elements.len(), 1);
        assert!(matches!(elements[0], Element::Paragraph { .. }));
        assert!(elements[0].plain_text().contains("unclosed bold"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_markdown("").is_empty());
        assert!(parse_markdown("\n\n   \n").is_empty());
    }
}
