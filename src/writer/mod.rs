//! Output package writers.

mod docx;
mod parts;

pub use docx::{to_docx_bytes, write_docx, DocxOptions, DocxWriter};
