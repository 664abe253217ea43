//! RTF rendering by control-word substitution.
//!
//! There is no object model here: Markdown markers are rewritten in place
//! into RTF control words. The result opens in Word and can be saved as DOCX
//! by hand; it is not meant to be a faithful conversion.

use regex::Regex;

/// Options for the RTF output.
#[derive(Debug, Clone)]
pub struct RtfOptions {
    /// Body font (`\f0`)
    pub body_font: String,

    /// Code font (`\f1`)
    pub code_font: String,

    /// Escape RTF specials and emit non-ASCII text as `\uN?`
    pub escape_text: bool,
}

impl RtfOptions {
    /// Create new RTF options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable text escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Set the body and code fonts.
    pub fn with_fonts(mut self, body: impl Into<String>, code: impl Into<String>) -> Self {
        self.body_font = body.into();
        self.code_font = code.into();
        self
    }
}

impl Default for RtfOptions {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            code_font: "Consolas".to_string(),
            escape_text: true,
        }
    }
}

/// Convert Markdown to an RTF document.
pub fn to_rtf(markdown: &str, options: &RtfOptions) -> String {
    RtfRenderer::new(options.clone()).render(markdown)
}

/// Markdown to RTF substitution renderer.
pub struct RtfRenderer {
    options: RtfOptions,
    rules: Vec<(Regex, &'static str)>,
}

impl RtfRenderer {
    /// Create a renderer with the substitution rules compiled.
    pub fn new(options: RtfOptions) -> Self {
        let rules = vec![
            (r"(?m)^# (.*)", r"\fs36\b ${1}\b0\fs24\par"),
            (r"(?m)^## (.*)", r"\fs28\b ${1}\b0\fs24\par"),
            (r"(?m)^### (.*)", r"\fs24\b ${1}\b0\fs24\par"),
            (r"(?s)```bash\n(.*?)\n```", r"\f1\fs20 ${1} \f0\fs24\par"),
            (r"(?s)```(.*?)\n(.*?)\n```", r"\f1\fs20 ${2} \f0\fs24\par"),
            (r"`([^`]+)`", r"\f1 ${1} \f0"),
            (r"\*\*(.*?)\*\*", r"\b ${1} \b0"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
        .collect();

        Self { options, rules }
    }

    /// Render Markdown into a complete RTF document.
    pub fn render(&self, markdown: &str) -> String {
        let mut output = self.header();
        output.push('\n');
        output.push_str(&self.render_body(markdown));
        output.push_str("\n}");
        output
    }

    /// The `{\rtf1 ...` header with its font table.
    pub fn header(&self) -> String {
        format!(
            "{{\\rtf1\\ansi\\deff0 {{\\fonttbl {{\\f0 {};}}{{\\f1 {};}}}}",
            self.options.body_font, self.options.code_font
        )
    }

    /// Rewrite Markdown markers into control words, without the header.
    pub fn render_body(&self, markdown: &str) -> String {
        let mut content = markdown.replace("\r\n", "\n");
        if self.options.escape_text {
            content = escape_specials(&content);
        }

        for (regex, replacement) in &self.rules {
            content = regex.replace_all(&content, *replacement).into_owned();
        }
        content = content.replace('\n', "\\par\n");

        if self.options.escape_text {
            content = escape_unicode(&content);
        }
        content
    }
}

/// Escape the characters RTF treats as syntax.
fn escape_specials(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Encode non-ASCII characters as `\uN?` with signed UTF-16 code units.
fn escape_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u16; 2];
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut buf) {
            out.push_str(&format!("\\u{}?", *unit as i16));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(markdown: &str) -> String {
        RtfRenderer::new(RtfOptions::default().with_escaping(false)).render_body(markdown)
    }

    #[test]
    fn test_headings() {
        assert_eq!(body("# Title"), r"\fs36\b Title\b0\fs24\par");
        assert_eq!(body("## Sub"), r"\fs28\b Sub\b0\fs24\par");
        assert_eq!(body("### Minor"), r"\fs24\b Minor\b0\fs24\par");
    }

    #[test]
    fn test_code_blocks() {
        assert_eq!(
            body("```bash\nnpm ci\n```"),
            r"\f1\fs20 npm ci \f0\fs24\par"
        );
        assert_eq!(
            body("```nginx\nlisten 80;\n```"),
            r"\f1\fs20 listen 80; \f0\fs24\par"
        );
    }

    #[test]
    fn test_inline_code_and_bold() {
        assert_eq!(
            body("Run `pm2 start` **now**"),
            r"Run \f1 pm2 start \f0 \b now \b0"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(body("a\nb"), "a\\par\nb");
    }

    #[test]
    fn test_document_wrapper() {
        let rtf = to_rtf("x", &RtfOptions::default());
        assert!(rtf.starts_with(
            r"{\rtf1\ansi\deff0 {\fonttbl {\f0 Times New Roman;}{\f1 Consolas;}}"
        ));
        assert!(rtf.ends_with("\nx\n}"));
    }

    #[test]
    fn test_escaping() {
        let renderer = RtfRenderer::new(RtfOptions::default());
        assert_eq!(renderer.render_body(r"C:\www {x}"), r"C:\\www \{x\}");
        assert_eq!(renderer.render_body("Tạo"), r"T\u7841?o");
        assert_eq!(renderer.render_body("🚀"), r"\u-10179?\u-8576?");
    }
}
