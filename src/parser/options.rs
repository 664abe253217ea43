//! Parsing options and configuration.

use pulldown_cmark::Options;

/// Options for parsing Markdown sources.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Recognize GFM pipe tables
    pub tables: bool,

    /// Recognize `~~strikethrough~~`
    pub strikethrough: bool,

    /// Maximum heading level kept as-is; deeper headings are clamped to it
    pub max_heading_level: u8,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable table support.
    pub fn with_tables(mut self, enabled: bool) -> Self {
        self.tables = enabled;
        self
    }

    /// Enable or disable strikethrough support.
    pub fn with_strikethrough(mut self, enabled: bool) -> Self {
        self.strikethrough = enabled;
        self
    }

    /// Set the maximum heading level (1-4).
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 4);
        self
    }

    /// Extension flags for the underlying parser.
    pub(crate) fn cmark_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        options
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: false,
            max_heading_level: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_tables(false)
            .with_strikethrough(true)
            .with_max_heading(9);

        assert!(!options.tables);
        assert!(options.strikethrough);
        assert_eq!(options.max_heading_level, 4);
    }

    #[test]
    fn test_cmark_options() {
        let options = ParseOptions::default().cmark_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(!options.contains(Options::ENABLE_STRIKETHROUGH));
    }
}
