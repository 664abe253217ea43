//! File-level conversion pipelines.
//!
//! A converter reads one Markdown file and writes its outputs next to it
//! (or into a configured directory). Two converters ship with the crate:
//! [`DocxConverter`] for the styled Word document and
//! [`TextBundleConverter`] for the RTF, formatted text and instructions
//! files. The [`ConverterRegistry`] dispatches by converter name.
//!
//! # Example
//!
//! ```no_run
//! use mdword::convert::{ConverterRegistry, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> mdword::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let input = Path::new("VPS_DEPLOYMENT_GUIDE.md");
//!
//!     for report in registry.convert_all(input, &ConvertOptions::default())? {
//!         for output in &report.outputs {
//!             println!("{}", output.display());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod bundle;
mod docx;

pub use bundle::{TextBundleConverter, FORMATTED_SUFFIX};
pub use docx::{DocxConverter, DocxStage};

use crate::error::{Error, Result};
use crate::parser::ParseOptions;
use crate::render::{RenderOptions, RenderStats, RtfOptions, TextOptions};
use crate::writer::DocxOptions;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default input file name used by the command line tool.
pub const DEFAULT_INPUT: &str = "VPS_DEPLOYMENT_GUIDE.md";

/// Options for file conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Markdown parsing options
    pub parse: ParseOptions,

    /// Rich-document rendering options
    pub render: RenderOptions,

    /// DOCX package options
    pub docx: DocxOptions,

    /// Formatted text options
    pub text: TextOptions,

    /// RTF options
    pub rtf: RtfOptions,

    /// Directory for outputs; the input's directory when unset
    pub output_dir: Option<PathBuf>,

    /// Exact path of the DOCX output; overrides `output_dir` for it
    pub docx_path: Option<PathBuf>,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set DOCX package options.
    pub fn with_docx_options(mut self, options: DocxOptions) -> Self {
        self.docx = options;
        self
    }

    /// Set formatted text options.
    pub fn with_text_options(mut self, options: TextOptions) -> Self {
        self.text = options;
        self
    }

    /// Set RTF options.
    pub fn with_rtf_options(mut self, options: RtfOptions) -> Self {
        self.rtf = options;
        self
    }

    /// Write outputs into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Write the DOCX to exactly `path`.
    pub fn with_docx_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.docx_path = Some(path.into());
        self
    }

    /// Directory the outputs for `input` land in.
    pub fn output_dir_for(&self, input: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    /// Output path `<dir>/<stem><suffix>` for `input`.
    pub fn output_path(&self, input: &Path, suffix: &str) -> PathBuf {
        self.output_dir_for(input)
            .join(format!("{}{}", file_stem(input), suffix))
    }
}

/// Outcome of one converter run.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Name of the converter that produced this report
    pub converter: &'static str,

    /// Files written, in write order
    pub outputs: Vec<PathBuf>,

    /// Rendering statistics (DOCX only)
    pub stats: Option<RenderStats>,
}

impl ConvertReport {
    /// Create an empty report for a converter.
    pub fn new(converter: &'static str) -> Self {
        Self {
            converter,
            outputs: Vec::new(),
            stats: None,
        }
    }

    /// Record a written file.
    pub fn with_output(mut self, path: PathBuf) -> Self {
        self.outputs.push(path);
        self
    }

    /// Attach rendering statistics.
    pub fn with_stats(mut self, stats: RenderStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Trait for file converters.
///
/// Implement this trait to add another output pipeline.
pub trait Converter: Send + Sync {
    /// Get the name of this converter.
    fn name(&self) -> &'static str;

    /// Convert the Markdown file at `input`, writing outputs to disk.
    fn convert(&self, input: &Path, options: &ConvertOptions) -> Result<ConvertReport>;
}

/// Registry of converters keyed by name.
///
/// Iteration order is the name order, so `convert_all` is deterministic.
pub struct ConverterRegistry {
    by_name: BTreeMap<String, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_name: BTreeMap::new(),
        }
    }

    /// Create a registry with the DOCX and text bundle converters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxConverter::new()));
        registry.register(Arc::new(TextBundleConverter::new()));
        registry
    }

    /// Register a converter, replacing any with the same name.
    pub fn register(&mut self, converter: Arc<dyn Converter>) {
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Converter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Names of all registered converters.
    pub fn names(&self) -> Vec<&str> {
        self.by_name.keys().map(|s| s.as_str()).collect()
    }

    /// Convert with the named converter.
    pub fn convert(
        &self,
        name: &str,
        input: &Path,
        options: &ConvertOptions,
    ) -> Result<ConvertReport> {
        let converter = self
            .get(name)
            .ok_or_else(|| Error::Other(format!("No converter named: {}", name)))?;
        converter.convert(input, options)
    }

    /// Run every registered converter; stops at the first failure.
    pub fn convert_all(
        &self,
        input: &Path,
        options: &ConvertOptions,
    ) -> Result<Vec<ConvertReport>> {
        self.by_name
            .values()
            .map(|converter| converter.convert(input, options))
            .collect()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Read the whole input, reporting a missing file before anything else.
pub fn read_markdown(input: &Path) -> Result<String> {
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    Ok(fs::read_to_string(input)?)
}

/// Write `content` to `path`, creating parent directories as needed.
pub(crate) fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}
