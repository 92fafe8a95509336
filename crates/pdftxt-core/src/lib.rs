//! Core library for page-by-page PDF text extraction.
//!
//! This crate provides:
//! - A scoped PDF document handle with a lazy, ordered page iterator
//! - Pluggable page-text backends (lopdf, pdf-extract)
//! - Whole-document extraction that joins page text with newlines
//! - Configuration and error types shared with the CLI

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

pub use error::{PdfError, PdftxtError, Result};
pub use extract::{extract_text, TextExtractor};
pub use models::config::{Backend, OutputConfig, PdfConfig, PdftxtConfig};
pub use models::text::ExtractedText;
pub use pdf::{Page, Pages, PdfDocument, PdfProcessor};
