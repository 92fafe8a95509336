//! PDF processing module.

mod document;
mod extractor;
mod layout;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use document::{Page, Pages, PdfDocument};
pub use extractor::PdfExtractor;
pub use layout::LayoutExtractor;

use crate::error::PdfError;
use crate::models::config::Backend;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for page-text backends.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the raw text of a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

impl Backend {
    /// Create an unloaded processor for this backend.
    pub fn processor(self, password: &str) -> Box<dyn PdfProcessor> {
        match self {
            Backend::Lopdf => Box::new(PdfExtractor::new().with_password(password)),
            Backend::PdfExtract => Box::new(LayoutExtractor::new().with_password(password)),
        }
    }
}

/// Normalize raw page text, returning `None` for pages without text.
///
/// Backends surround page text with line breaks of their own; those are
/// stripped so every page contributes exactly one trailing newline.
/// A page whose text is only whitespace counts as having no text.
pub fn normalize_page_text(raw: &str) -> Option<String> {
    let text = raw.trim_matches(|c| c == '\n' || c == '\r');
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
