//! Per-page text extraction using lopdf.

use lopdf::Document;
use tracing::{debug, trace};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// Page-text backend built on lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    page_count: u32,
    password: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            page_count: 0,
            password: String::new(),
        }
    }

    /// Set the password tried on encrypted documents.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a PDF, decrypting it if needed.
///
/// Returns the document and whether it had to be decrypted.
pub(super) fn load_document(data: &[u8], password: &str) -> Result<(Document, bool)> {
    let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

    let decrypted = doc.is_encrypted();
    if decrypted {
        if doc.decrypt(password).is_err() {
            return Err(PdfError::Encrypted);
        }
        if password.is_empty() {
            debug!("Decrypted PDF with empty password");
        } else {
            debug!("Decrypted PDF with configured password");
        }
    }

    if doc.get_pages().is_empty() {
        return Err(PdfError::NoPages);
    }

    Ok((doc, decrypted))
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let (doc, _) = load_document(data, &self.password)?;

        self.page_count = doc.get_pages().len() as u32;
        debug!("Loaded PDF with {} pages", self.page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;
        if page == 0 || page > self.page_count {
            return Err(PdfError::InvalidPage(page));
        }

        let text = doc
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction {
                page,
                reason: e.to_string(),
            })?;
        trace!("lopdf returned {} bytes for page {}", text.len(), page);
        Ok(text)
    }
}
