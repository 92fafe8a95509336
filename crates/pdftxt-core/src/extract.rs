//! Whole-document text extraction.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::config::PdfConfig;
use crate::models::text::ExtractedText;
use crate::pdf::{self, PdfDocument};

/// Extracts the text of every page of a PDF, in page order.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    config: PdfConfig,
}

impl TextExtractor {
    /// Create an extractor with the given PDF configuration.
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Extract the text of the PDF at `path`.
    ///
    /// Pages without text are skipped; every other page contributes its text
    /// followed by a single newline. Any failure discards the text gathered
    /// so far.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<ExtractedText> {
        let document = PdfDocument::open(path, &self.config)?;
        Ok(collect_pages(&document)?)
    }

    /// Extract the text of a PDF held in memory.
    pub fn extract_mem(&self, data: &[u8]) -> Result<ExtractedText> {
        let document = PdfDocument::from_bytes(data, &self.config)?;
        Ok(collect_pages(&document)?)
    }
}

/// Extract the text of the PDF at `path` with the default configuration.
pub fn extract_text(path: impl AsRef<Path>) -> Result<ExtractedText> {
    TextExtractor::default().extract_file(path)
}

/// Join the text of every page of an opened document.
pub fn collect_pages(document: &PdfDocument) -> pdf::Result<ExtractedText> {
    let mut extracted = ExtractedText::new(document.page_count());

    for page in document.pages() {
        match page.extract_text()? {
            Some(text) => {
                trace!("Page {}: {} chars", page.number(), text.len());
                extracted.push_page(&text);
            }
            None => debug!("Page {} has no extractable text, skipping", page.number()),
        }
    }

    debug!(
        "Extracted text from {}/{} pages ({} chars)",
        extracted.pages_with_text,
        extracted.page_count,
        extracted.text.len()
    );
    Ok(extracted)
}
