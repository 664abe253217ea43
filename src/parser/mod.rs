//! Markdown parsing module.

mod markdown;
mod options;

pub use markdown::{parse_markdown, MarkdownParser};
pub use options::ParseOptions;
