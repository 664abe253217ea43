//! Markdown to DOCX converter.

use crate::error::Result;
use crate::parser::MarkdownParser;
use crate::render::{paginate, DocumentRenderer, RenderStats};
use crate::writer::DocxWriter;
use std::path::Path;

use super::{read_markdown, write_output, ConvertOptions, ConvertReport, Converter};

/// Stages of the DOCX pipeline, reported in order as each one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocxStage {
    /// Markdown to elements
    Parse,
    /// Elements to styled paragraphs
    Render,
    /// Section page breaks
    Paginate,
    /// Zip package assembly and file output
    Write,
}

impl DocxStage {
    /// All stages in pipeline order.
    pub const ALL: [DocxStage; 4] = [
        DocxStage::Parse,
        DocxStage::Render,
        DocxStage::Paginate,
        DocxStage::Write,
    ];

    /// Zero-based position in the pipeline.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short progress message.
    pub fn message(self) -> &'static str {
        match self {
            DocxStage::Parse => "Parsing Markdown...",
            DocxStage::Render => "Rendering paragraphs...",
            DocxStage::Paginate => "Inserting page breaks...",
            DocxStage::Write => "Writing DOCX...",
        }
    }
}

/// Converts a Markdown file into a styled `.docx` next to it.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    _private: (),
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Parse, render and paginate in memory, returning the package bytes.
    pub fn convert_str(
        &self,
        markdown: &str,
        options: &ConvertOptions,
    ) -> Result<(Vec<u8>, RenderStats)> {
        self.convert_str_with_progress(markdown, options, |_| {})
    }

    /// Like [`convert_str`](Self::convert_str), calling `on_stage` as each stage starts.
    pub fn convert_str_with_progress<F>(
        &self,
        markdown: &str,
        options: &ConvertOptions,
        mut on_stage: F,
    ) -> Result<(Vec<u8>, RenderStats)>
    where
        F: FnMut(DocxStage),
    {
        on_stage(DocxStage::Parse);
        let elements = MarkdownParser::with_options(options.parse.clone()).parse(markdown);

        on_stage(DocxStage::Render);
        let result = DocumentRenderer::new(options.render.clone()).render_with_stats(&elements);
        let mut document = result.document;
        let mut stats = result.stats;

        on_stage(DocxStage::Paginate);
        let inserted = paginate(&mut document, &options.render);
        stats.add_page_breaks(inserted);

        on_stage(DocxStage::Write);
        let bytes = DocxWriter::with_options(options.docx.clone()).to_bytes(&document)?;
        Ok((bytes, stats))
    }

    /// Like [`Converter::convert`], calling `on_stage` as each stage starts.
    ///
    /// A missing input fails before any stage is reported.
    pub fn convert_with_progress<F>(
        &self,
        input: &Path,
        options: &ConvertOptions,
        on_stage: F,
    ) -> Result<ConvertReport>
    where
        F: FnMut(DocxStage),
    {
        let markdown = read_markdown(input)?;
        let (bytes, stats) = self.convert_str_with_progress(&markdown, options, on_stage)?;

        let output = match &options.docx_path {
            Some(path) => path.clone(),
            None => options.output_path(input, ".docx"),
        };
        write_output(&output, &bytes)?;

        Ok(ConvertReport::new(self.name())
            .with_output(output)
            .with_stats(stats))
    }
}

impl Converter for DocxConverter {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn convert(&self, input: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
        self.convert_with_progress(input, options, |_| {})
    }
}
