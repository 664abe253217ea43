//! DOCX package writer.
//!
//! Serializes an [`OutputDocument`] into a WordprocessingML zip package.
//! The body is written as plain XML text; the style sheet becomes the
//! styles part so paragraphs only carry a `w:pStyle` reference.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::parts::{self, xml_escape, NS_MAIN, NS_REL};
use crate::error::Result;
use crate::model::{
    inches_to_twips, pt_to_half_points, Block, InlineContent, OutputDocument, Paragraph,
    ParagraphKind, StyleSheet, TextRun,
};

/// US Letter, in twips.
const PAGE_WIDTH_TWIPS: u32 = 12240;
const PAGE_HEIGHT_TWIPS: u32 = 15840;

/// Options for the DOCX package.
#[derive(Debug, Clone)]
pub struct DocxOptions {
    /// Document title for the core properties; the first title or
    /// heading paragraph is used when unset
    pub title: Option<String>,

    /// Creator recorded in the core properties
    pub creator: String,

    /// Creation timestamp; the current time when unset
    pub created: Option<DateTime<Utc>>,

    /// Deflate level for the package entries
    pub compression_level: Option<u32>,
}

impl DocxOptions {
    /// Create new DOCX options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the creator.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Fix the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the deflate level.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = Some(level);
        self
    }
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            title: None,
            creator: env!("CARGO_PKG_NAME").to_string(),
            created: None,
            compression_level: None,
        }
    }
}

/// Write a document to a seekable sink.
pub fn write_docx<W: Write + Seek>(doc: &OutputDocument, writer: W) -> Result<W> {
    DocxWriter::new().write(doc, writer)
}

/// Serialize a document into an in-memory DOCX package.
pub fn to_docx_bytes(doc: &OutputDocument) -> Result<Vec<u8>> {
    DocxWriter::new().to_bytes(doc)
}

/// DOCX package writer.
pub struct DocxWriter {
    options: DocxOptions,
}

impl DocxWriter {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self::with_options(DocxOptions::default())
    }

    /// Create a writer with custom options.
    pub fn with_options(options: DocxOptions) -> Self {
        Self { options }
    }

    /// Write the package into `writer` and hand the sink back.
    pub fn write<W: Write + Seek>(&self, doc: &OutputDocument, writer: W) -> Result<W> {
        let body = BodyWriter::new(&doc.styles).write(doc);
        let title = self
            .options
            .title
            .clone()
            .or_else(|| document_title(doc));
        let created = self.options.created.unwrap_or_else(Utc::now);

        let compression_level = self.options.compression_level.unwrap_or(6);
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(compression_level as i64));

        let mut zip = ZipWriter::new(writer);

        let entries = [
            ("[Content_Types].xml", parts::content_types()),
            ("_rels/.rels", parts::package_rels()),
            ("word/document.xml", body.xml),
            ("word/styles.xml", parts::styles(&doc.styles)),
            ("word/numbering.xml", parts::numbering()),
            ("word/_rels/document.xml.rels", parts::document_rels(&body.hyperlinks)),
            (
                "docProps/core.xml",
                parts::core_properties(title.as_deref(), &self.options.creator, created),
            ),
            ("docProps/app.xml", parts::app_properties(&self.options.creator)),
        ];

        for (name, content) in &entries {
            zip.start_file(*name, deflated)?;
            zip.write_all(content.as_bytes())?;
        }

        let writer = zip.finish()?;
        log::debug!(
            "Wrote DOCX package: {} blocks, {} hyperlinks",
            doc.blocks.len(),
            body.hyperlinks.len()
        );
        Ok(writer)
    }

    /// Serialize into a byte vector.
    pub fn to_bytes(&self, doc: &OutputDocument) -> Result<Vec<u8>> {
        let cursor = self.write(doc, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write the package to a file, replacing it if present.
    pub fn write_file(&self, doc: &OutputDocument, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = self.write(doc, BufWriter::new(file))?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn document_title(doc: &OutputDocument) -> Option<String> {
    doc.paragraphs()
        .find(|p| matches!(p.kind, ParagraphKind::Title | ParagraphKind::Heading1))
        .map(Paragraph::plain_text)
}

/// The serialized body and the hyperlink targets it references.
struct Body {
    xml: String,
    hyperlinks: Vec<String>,
}

struct BodyWriter<'a> {
    styles: &'a StyleSheet,
    xml: String,
    hyperlinks: Vec<String>,
}

impl<'a> BodyWriter<'a> {
    fn new(styles: &'a StyleSheet) -> Self {
        Self {
            styles,
            xml: String::with_capacity(16 * 1024),
            hyperlinks: Vec::new(),
        }
    }

    fn write(mut self, doc: &OutputDocument) -> Body {
        self.xml.push_str(parts::XML_DECLARATION);
        self.xml.push('\n');
        self.xml.push_str(&format!(
            r#"<w:document xmlns:w="{NS_MAIN}" xmlns:r="{NS_REL}"><w:body>"#
        ));

        for block in &doc.blocks {
            match block {
                Block::Paragraph(paragraph) => self.paragraph(paragraph),
                Block::PageBreak => self
                    .xml
                    .push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#),
            }
        }

        self.section_properties();
        self.xml.push_str("</w:body></w:document>");

        Body {
            xml: self.xml,
            hyperlinks: self.hyperlinks,
        }
    }

    fn paragraph(&mut self, paragraph: &Paragraph) {
        self.xml.push_str("<w:p>");
        if let Some(style_id) = self.style_id(paragraph.kind) {
            self.xml.push_str(&format!(
                r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#,
                xml_escape(style_id)
            ));
        }

        for content in &paragraph.content {
            match content {
                InlineContent::Text(run) => self.run(run),
                InlineContent::Hyperlink { run, url } => {
                    let rel = self.hyperlink_rel(url);
                    self.xml
                        .push_str(&format!(r#"<w:hyperlink r:id="rId{rel}" w:history="1">"#));
                    self.run(run);
                    self.xml.push_str("</w:hyperlink>");
                }
            }
        }
        self.xml.push_str("</w:p>");
    }

    fn style_id(&self, kind: ParagraphKind) -> Option<&'a str> {
        let styles = self.styles;
        match kind {
            ParagraphKind::Title => Some(styles.title.id.as_str()),
            ParagraphKind::Heading1 => Some(styles.heading1.id.as_str()),
            ParagraphKind::Heading2 => Some(styles.heading2.id.as_str()),
            ParagraphKind::Heading3 => Some(styles.heading3.id.as_str()),
            ParagraphKind::CodeLine => Some(styles.code_line.id.as_str()),
            ParagraphKind::ListBullet => Some(parts::LIST_BULLET_STYLE),
            ParagraphKind::ListNumber => Some(parts::LIST_NUMBER_STYLE),
            ParagraphKind::Normal => None,
        }
    }

    /// Relationship number for a URL; repeated URLs share one.
    fn hyperlink_rel(&mut self, url: &str) -> usize {
        let index = match self.hyperlinks.iter().position(|u| u == url) {
            Some(index) => index,
            None => {
                self.hyperlinks.push(url.to_string());
                self.hyperlinks.len() - 1
            }
        };
        index + parts::FIRST_HYPERLINK_REL
    }

    fn run(&mut self, run: &TextRun) {
        if run.text.is_empty() {
            return;
        }
        self.xml.push_str("<w:r>");
        self.run_properties(run);

        for (i, line) in run.text.split('\n').enumerate() {
            if i > 0 {
                self.xml.push_str("<w:br/>");
            }
            for (j, piece) in line.split('\t').enumerate() {
                if j > 0 {
                    self.xml.push_str("<w:tab/>");
                }
                if !piece.is_empty() {
                    self.xml.push_str(r#"<w:t xml:space="preserve">"#);
                    self.xml.push_str(&xml_escape(piece));
                    self.xml.push_str("</w:t>");
                }
            }
        }
        self.xml.push_str("</w:r>");
    }

    /// `w:rPr` children in schema order.
    fn run_properties(&mut self, run: &TextRun) {
        let style = &run.style;
        if !style.has_styling() {
            return;
        }
        self.xml.push_str("<w:rPr>");
        if let Some(font) = &style.font_name {
            self.xml.push_str(&parts::run_fonts(font));
        }
        if style.bold {
            self.xml.push_str("<w:b/>");
        }
        if style.italic {
            self.xml.push_str("<w:i/>");
        }
        if let Some(color) = &style.color {
            self.xml
                .push_str(&format!(r#"<w:color w:val="{}"/>"#, xml_escape(color)));
        }
        if let Some(size) = style.font_size {
            let size = pt_to_half_points(size);
            self.xml
                .push_str(&format!(r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#));
        }
        if style.underline {
            self.xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        self.xml.push_str("</w:rPr>");
    }

    fn section_properties(&mut self) {
        let margin = inches_to_twips(self.styles.page_margin_in);
        self.xml.push_str(&format!(
            r#"<w:sectPr><w:pgSz w:w="{PAGE_WIDTH_TWIPS}" w:h="{PAGE_HEIGHT_TWIPS}"/><w:pgMar w:top="{margin}" w:right="{margin}" w:bottom="{margin}" w:left="{margin}" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#
        ));
    }
}
