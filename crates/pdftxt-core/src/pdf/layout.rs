//! Layout-aware page text using pdf-extract.
//!
//! pdf-extract renders the whole document in one pass, so the pages are
//! computed on load and served per page afterwards. lopdf still does the
//! parsing and decryption so both backends accept the same inputs.

use tracing::{debug, warn};

use super::extractor::load_document;
use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// Page-text backend built on pdf-extract.
pub struct LayoutExtractor {
    pages: Vec<String>,
    page_count: u32,
    password: String,
    loaded: bool,
}

impl LayoutExtractor {
    /// Create a new layout extractor.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            page_count: 0,
            password: String::new(),
            loaded: false,
        }
    }

    /// Set the password tried on encrypted documents.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}

impl Default for LayoutExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for LayoutExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let (mut doc, decrypted) = load_document(data, &self.password)?;
        let page_count = doc.get_pages().len() as u32;

        // pdf-extract cannot decrypt with a password, hand it the decrypted bytes
        let pages = if decrypted {
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            pdf_extract::extract_text_from_mem_by_pages(&decrypted_data)
        } else {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }
        .map_err(|e| PdfError::Parse(e.to_string()))?;

        check_page_count(pages.len(), page_count)?;

        debug!("Loaded PDF with {} pages", page_count);
        self.pages = pages;
        self.page_count = page_count;
        self.loaded = true;
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        if !self.loaded {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        if page == 0 || page > self.page_count {
            return Err(PdfError::InvalidPage(page));
        }

        self.pages
            .get((page - 1) as usize)
            .cloned()
            .ok_or(PdfError::InvalidPage(page))
    }
}

/// Reject pdf-extract output that does not line up with lopdf's page tree.
fn check_page_count(produced: usize, page_count: u32) -> Result<()> {
    if produced != page_count as usize {
        warn!(
            "pdf-extract produced {} pages for a {} page document",
            produced, page_count
        );
        return Err(PdfError::Parse(format!(
            "pdf-extract produced {} pages, expected {}",
            produced, page_count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::{encrypted_pdf_with_pages, pdf_with_pages};
    use crate::pdf::normalize_page_text;

    #[test]
    fn test_layout_extractor_new() {
        let extractor = LayoutExtractor::new();
        assert_eq!(extractor.page_count(), 0);
        assert!(matches!(
            extractor.extract_page_text(1),
            Err(PdfError::Parse(_))
        ));
    }

    #[test]
    fn test_load_and_extract_pages() {
        let data = pdf_with_pages(&[Some("Layout first"), None, Some("Layout third")]);
        let mut extractor = LayoutExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 3);
        let first = extractor.extract_page_text(1).unwrap();
        assert!(first.contains("Layout first"));
        assert!(!first.contains("Layout third"));
        let blank = extractor.extract_page_text(2).unwrap();
        assert_eq!(normalize_page_text(&blank), None);
        assert!(matches!(extractor.extract_page_text(4), Err(PdfError::InvalidPage(4))));
    }

    #[test]
    fn test_check_page_count() {
        assert!(check_page_count(3, 3).is_ok());
        assert!(matches!(check_page_count(2, 3), Err(PdfError::Parse(_))));
        assert!(matches!(check_page_count(4, 3), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_encrypted() {
        let data = encrypted_pdf_with_pages(&[Some("Locked")]);
        let mut extractor = LayoutExtractor::new().with_password("wrong");
        assert!(matches!(extractor.load(&data), Err(PdfError::Encrypted)));
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_garbage() {
        let mut extractor = LayoutExtractor::new();
        assert!(extractor.load(b"%PDF-1.4 truncated").is_err());
        assert_eq!(extractor.page_count(), 0);
    }
}
