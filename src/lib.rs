//! # mdword
//!
//! Markdown to Word document conversion for Rust.
//!
//! This library turns a Markdown deployment guide into a styled DOCX
//! package, and alongside it into an RTF file, a formatted plain-text file
//! and a short set of instructions for finishing the document in Word.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdword::{parse_file, render, writer};
//!
//! fn main() -> mdword::Result<()> {
//!     // Parse a Markdown file
//!     let elements = parse_file("VPS_DEPLOYMENT_GUIDE.md")?;
//!
//!     // Render, paginate and package
//!     let options = render::RenderOptions::default();
//!     let mut document = render::to_document(&elements, &options);
//!     render::paginate(&mut document, &options);
//!     writer::DocxWriter::new().write_file(&document, "VPS_DEPLOYMENT_GUIDE.docx")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Styled DOCX**: custom title, heading and code styles, real hyperlinks
//! - **Section pagination**: page breaks before known section headings
//! - **Plain outputs**: RTF by marker substitution, bannered plain text
//! - **Element dump**: the parsed element tree as JSON

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod writer;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertReport, Converter, ConverterRegistry};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Element, InlineContent, InlineSpan, ListItem, ListKind, OutputDocument,
    Paragraph, ParagraphKind, StyleDefinition, StyleSheet, TextRun, TextStyle,
};
pub use parser::{MarkdownParser, ParseOptions};
pub use render::{JsonFormat, PaginationMode, RenderOptions, RtfOptions, TextOptions};
pub use writer::{DocxOptions, DocxWriter};

use std::path::{Path, PathBuf};

/// Parse Markdown text into elements.
///
/// # Example
///
/// ```
/// use mdword::{parse_str, Element};
///
/// let elements = parse_str("# Guide\n\nHello **world**.\n");
/// assert!(matches!(elements[0], Element::Heading { level: 1, .. }));
/// ```
pub fn parse_str(markdown: &str) -> Vec<Element> {
    MarkdownParser::new().parse(markdown)
}

/// Parse a Markdown file.
///
/// # Example
///
/// ```no_run
/// use mdword::parse_file;
///
/// let elements = parse_file("VPS_DEPLOYMENT_GUIDE.md").unwrap();
/// println!("Elements: {}", elements.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a Markdown file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Vec<Element>> {
    let markdown = convert::read_markdown(path.as_ref())?;
    Ok(MarkdownParser::with_options(options).parse(&markdown))
}

/// Convert a Markdown file to `<stem>.docx` next to it.
///
/// # Example
///
/// ```no_run
/// use mdword::to_docx;
///
/// let output = to_docx("VPS_DEPLOYMENT_GUIDE.md").unwrap();
/// println!("{}", output.display());
/// ```
pub fn to_docx<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    to_docx_with_options(path, &ConvertOptions::default())
}

/// Convert a Markdown file to DOCX with custom options.
pub fn to_docx_with_options<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<PathBuf> {
    let report = convert::DocxConverter::new().convert(path.as_ref(), options)?;
    report
        .outputs
        .into_iter()
        .next()
        .ok_or_else(|| Error::Other("DOCX converter wrote no output".into()))
}

/// Write the RTF, formatted text and instructions files for a Markdown file.
///
/// Returns the written paths in that order.
pub fn to_text_bundle<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let report = convert::TextBundleConverter::new()
        .convert(path.as_ref(), &ConvertOptions::default())?;
    Ok(report.outputs)
}

/// Dump the parsed elements of a Markdown file as JSON.
///
/// # Example
///
/// ```no_run
/// use mdword::{to_json, JsonFormat};
///
/// let json = to_json("VPS_DEPLOYMENT_GUIDE.md", JsonFormat::Pretty).unwrap();
/// std::fs::write("elements.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let elements = parse_file(path)?;
    render::to_json(&elements, format)
}

/// Builder for parsing and converting Markdown documents.
///
/// # Example
///
/// ```no_run
/// use mdword::{Mdword, PaginationMode};
///
/// Mdword::new()
///     .with_pagination(PaginationMode::EveryMatch)
///     .with_title_marker("DEPLOYMENT GUIDE")
///     .parse("guide.md")?
///     .write_docx("guide.docx")?;
/// # Ok::<(), mdword::Error>(())
/// ```
pub struct Mdword {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Mdword {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable or disable table parsing.
    pub fn with_tables(mut self, enable: bool) -> Self {
        self.parse_options = self.parse_options.with_tables(enable);
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.render_options = self.render_options.with_styles(styles);
        self
    }

    /// Set the title marker.
    pub fn with_title_marker(mut self, marker: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title_marker(marker);
        self
    }

    /// Set the section titles that trigger page breaks.
    pub fn with_section_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.render_options = self.render_options.with_section_titles(titles);
        self
    }

    /// Set the pagination mode.
    pub fn with_pagination(mut self, mode: PaginationMode) -> Self {
        self.render_options = self.render_options.with_pagination(mode);
        self
    }

    /// Parse Markdown text.
    pub fn parse_str(self, markdown: &str) -> MdwordResult {
        let elements = MarkdownParser::with_options(self.parse_options).parse(markdown);
        MdwordResult {
            markdown: markdown.to_string(),
            elements,
            render_options: self.render_options,
        }
    }

    /// Parse a Markdown file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<MdwordResult> {
        let markdown = convert::read_markdown(path.as_ref())?;
        Ok(self.parse_str(&markdown))
    }
}

impl Default for Mdword {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a Markdown document.
pub struct MdwordResult {
    markdown: String,
    /// The parsed elements
    pub elements: Vec<Element>,
    render_options: RenderOptions,
}

impl MdwordResult {
    /// Render and paginate the rich document.
    pub fn document(&self) -> OutputDocument {
        let mut document = render::to_document(&self.elements, &self.render_options);
        render::paginate(&mut document, &self.render_options);
        document
    }

    /// Serialize the rich document as DOCX bytes.
    pub fn to_docx_bytes(&self) -> Result<Vec<u8>> {
        writer::to_docx_bytes(&self.document())
    }

    /// Write the rich document to a DOCX file.
    pub fn write_docx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        DocxWriter::new().write_file(&self.document(), path)
    }

    /// Formatted plain text with the banner header.
    pub fn to_text(&self, options: &TextOptions) -> String {
        render::to_text(&self.markdown, options)
    }

    /// RTF document.
    pub fn to_rtf(&self, options: &RtfOptions) -> String {
        render::to_rtf(&self.markdown, options)
    }

    /// Convert the elements to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.elements, format)
    }

    /// Markup-stripped text without the banner.
    pub fn plain_text(&self) -> String {
        render::strip_markdown(&self.markdown)
    }

    /// Get the source Markdown.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUIDE: &str = "# Guide\n\nHello **world**.\n";

    #[test]
    fn test_mdword_builder() {
        let builder = Mdword::new()
            .with_tables(false)
            .with_pagination(PaginationMode::Disabled)
            .with_title_marker("GUIDE");

        assert!(!builder.parse_options.tables);
        assert_eq!(builder.render_options.pagination, PaginationMode::Disabled);
        assert_eq!(builder.render_options.title_marker, "GUIDE");
    }

    #[test]
    fn test_mdword_builder_default() {
        let builder = Mdword::default();
        assert_eq!(builder.render_options.pagination, PaginationMode::FirstMatch);
        assert!(builder.parse_options.tables);
    }

    #[test]
    fn test_end_to_end_rich_output() {
        let document = Mdword::new().parse_str(GUIDE).document();
        let paragraphs: Vec<_> = document.paragraphs().collect();

        assert_eq!(paragraphs.len(), 2);
        assert!(matches!(
            paragraphs[0].kind,
            ParagraphKind::Title | ParagraphKind::Heading1
        ));
        assert_eq!(paragraphs[0].plain_text(), "Guide");

        let runs: Vec<_> = paragraphs[1].runs().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "Hello ");
        assert!(!runs[0].style.bold);
        assert_eq!(runs[1].text, "world");
        assert!(runs[1].style.bold);
        assert_eq!(runs[2].text, ".");
    }

    #[test]
    fn test_end_to_end_text_output() {
        let result = Mdword::new().parse_str(GUIDE);
        let text = result.to_text(&TextOptions::default());
        let body = result.plain_text();

        assert!(text.contains("Guide"));
        assert!(text.contains("Hello world."));
        assert!(!body.contains('#'));
        assert!(!body.contains('*'));
    }

    #[test]
    fn test_end_to_end_docx_bytes() {
        let bytes = Mdword::new().parse_str(GUIDE).to_docx_bytes().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("no/such/guide.md");
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_parse_str_heading() {
        let elements = parse_str(GUIDE);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].plain_text(), "Guide");
    }

    #[test]
    fn test_json_format_default() {
        assert_eq!(JsonFormat::default(), JsonFormat::Pretty);
    }
}
