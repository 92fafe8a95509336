//! Error types for the pdftxt-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the pdftxt library.
#[derive(Error, Debug)]
pub enum PdftxtError {
    /// The input file could not be read.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and the configured password does not open it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Failed to extract text from a page.
    #[error("failed to extract text from page {page}: {reason}")]
    TextExtraction { page: u32, reason: String },

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for the pdftxt library.
pub type Result<T> = std::result::Result<T, PdftxtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_mentions_path() {
        let err = PdftxtError::Open {
            path: PathBuf::from("/missing/resume.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/resume.pdf"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_pdf_error_wraps() {
        let err: PdftxtError = PdfError::TextExtraction {
            page: 3,
            reason: "bad content stream".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "PDF error: failed to extract text from page 3: bad content stream"
        );
    }
}
