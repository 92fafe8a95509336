//! Scoped document handle and its page sequence.

use std::fs;
use std::iter::FusedIterator;
use std::path::Path;

use tracing::debug;

use super::{normalize_page_text, PdfProcessor, Result};
use crate::error::PdftxtError;
use crate::models::config::PdfConfig;

/// An opened PDF document.
///
/// The whole file is read into memory by [`PdfDocument::open`]; the OS file
/// handle is closed before it returns and the parsed document is released
/// when the handle is dropped.
pub struct PdfDocument {
    processor: Box<dyn PdfProcessor>,
    page_count: u32,
}

impl PdfDocument {
    /// Open the PDF at `path` with the configured backend.
    pub fn open(path: impl AsRef<Path>, config: &PdfConfig) -> crate::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| PdftxtError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", data.len(), path.display());

        Ok(Self::from_bytes(&data, config)?)
    }

    /// Load a PDF from bytes with the configured backend.
    pub fn from_bytes(data: &[u8], config: &PdfConfig) -> Result<Self> {
        debug!("Using {:?} backend", config.backend);
        Self::with_processor(config.backend.processor(config.password()), data)
    }

    /// Load a PDF from bytes with an explicit backend.
    pub fn with_processor(mut processor: Box<dyn PdfProcessor>, data: &[u8]) -> Result<Self> {
        processor.load(data)?;
        let page_count = processor.page_count();
        Ok(Self {
            processor,
            page_count,
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Iterate the pages in document order.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            processor: self.processor.as_ref(),
            next: 1,
            page_count: self.page_count,
        }
    }
}

/// Lazy iterator over the pages of a [`PdfDocument`].
pub struct Pages<'a> {
    processor: &'a dyn PdfProcessor,
    next: u32,
    page_count: u32,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.page_count {
            return None;
        }
        let page = Page {
            processor: self.processor,
            number: self.next,
        };
        self.next += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.page_count + 1 - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}

/// One page of a [`PdfDocument`].
#[derive(Clone, Copy)]
pub struct Page<'a> {
    processor: &'a dyn PdfProcessor,
    number: u32,
}

impl Page<'_> {
    /// Page number (1-indexed).
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Extract this page's text; `None` when the page has no text layer.
    pub fn extract_text(&self) -> Result<Option<String>> {
        let raw = self.processor.extract_page_text(self.number)?;
        Ok(normalize_page_text(&raw))
    }
}
