//! Markup stripping for the plain-text rendering.
//!
//! Works directly on the raw Markdown with regex substitutions instead of the
//! parsed element tree, so its idea of structure can differ from the rich
//! renderer: links and list markers are left exactly as written.

use regex::Regex;

/// Strip Markdown syntax from text with the default rules.
pub fn strip_markdown(text: &str) -> String {
    MarkupStripper::new().process(text)
}

/// Regex-based Markdown syntax stripper.
///
/// Rules run in a fixed order: fenced code delimiters, inline code backticks,
/// bold markers, italic markers, heading hashes, then blank-line collapsing.
/// Fences go first so their backticks are not mistaken for inline code.
/// Inline code consumes whole backtick runs on both sides, so a span
/// delimited by two or more backticks is unwrapped in a single pass.
/// Running the stripper on its own output leaves it unchanged.
pub struct MarkupStripper {
    fence_regex: Regex,
    inline_code_regex: Regex,
    bold_regex: Regex,
    italic_regex: Regex,
    heading_regex: Regex,
    blank_lines_regex: Regex,
}

impl MarkupStripper {
    /// Create a stripper with the compiled rule set.
    pub fn new() -> Self {
        Self {
            fence_regex: Regex::new(r"(?s)```\w*\n(.*?)\n```").unwrap(),
            inline_code_regex: Regex::new(r"`+([^`]+)`+").unwrap(),
            bold_regex: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            italic_regex: Regex::new(r"\*(.*?)\*").unwrap(),
            heading_regex: Regex::new(r"(?m)^(?:#{1,6}\s+)+").unwrap(),
            blank_lines_regex: Regex::new(r"\n{3,}").unwrap(),
        }
    }

    /// Process text through the stripping rules.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.replace("\r\n", "\n");

        result = self.fence_regex.replace_all(&result, "${1}").into_owned();
        result = self
            .inline_code_regex
            .replace_all(&result, "${1}")
            .into_owned();
        result = self.bold_regex.replace_all(&result, "${1}").into_owned();
        result = self.italic_regex.replace_all(&result, "${1}").into_owned();
        result = self.heading_regex.replace_all(&result, "").into_owned();
        result = self
            .blank_lines_regex
            .replace_all(&result, "\n\n")
            .into_owned();

        result
    }
}

impl Default for MarkupStripper {
    fn default() -> Self {
        Self::new()
    }
}
