//! Markdown to RTF plus formatted text converter.

use crate::error::Result;
use crate::render::{to_rtf, to_text, word_instructions, INSTRUCTIONS_FILE_NAME};
use std::path::Path;

use super::{read_markdown, write_output, ConvertOptions, ConvertReport, Converter};

/// Suffix appended to the input stem for the formatted text file.
pub const FORMATTED_SUFFIX: &str = "_FORMATTED.txt";

/// Writes `<stem>.rtf`, `<stem>_FORMATTED.txt` and the Word instructions.
///
/// Works on the raw Markdown text; the element parser is never involved.
#[derive(Debug, Clone, Default)]
pub struct TextBundleConverter {
    _private: (),
}

impl TextBundleConverter {
    /// Create a new text bundle converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Converter for TextBundleConverter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn convert(&self, input: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
        let markdown = read_markdown(input)?;
        let mut report = ConvertReport::new(self.name());

        let rtf_path = options.output_path(input, ".rtf");
        write_output(&rtf_path, to_rtf(&markdown, &options.rtf).as_bytes())?;
        report = report.with_output(rtf_path);

        let text_path = options.output_path(input, FORMATTED_SUFFIX);
        write_output(&text_path, to_text(&markdown, &options.text).as_bytes())?;

        let text_name = text_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        report = report.with_output(text_path);

        let instructions_path = options.output_dir_for(input).join(INSTRUCTIONS_FILE_NAME);
        write_output(&instructions_path, word_instructions(&text_name).as_bytes())?;

        Ok(report.with_output(instructions_path))
    }
}
