//! Rendering module for converting Markdown to the output formats.
//!
//! The rich path ([`to_document`] + [`paginate`]) works on parsed elements.
//! The plain path ([`to_text`], [`to_rtf`]) works on raw Markdown text and
//! never sees the parser.

mod document;
mod instructions;
mod json;
mod options;
pub mod pagination;
mod plain;
mod result;
mod rtf;
mod text;

pub use document::{is_web_url, to_document, to_document_with_stats, DocumentRenderer};
pub use instructions::{word_instructions, INSTRUCTIONS_FILE_NAME};
pub use json::{to_json, JsonFormat};
pub use options::{PaginationMode, RenderOptions, DEFAULT_SECTION_TITLES, DEFAULT_TITLE_MARKER};
pub use pagination::{paginate, SectionPaginator};
pub use plain::{strip_markdown, MarkupStripper};
pub use result::{RenderResult, RenderStats};
pub use rtf::{to_rtf, RtfOptions, RtfRenderer};
pub use text::{center, to_text, to_text_at, TextOptions, DEFAULT_BANNER_TITLE};
