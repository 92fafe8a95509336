//! Extracted document text.

use serde::{Deserialize, Serialize};

/// Text extracted from a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Text of every page that had any, in page order, each followed by `\n`.
    pub text: String,
    /// Number of pages in the document.
    pub page_count: u32,
    /// Number of pages that contributed text.
    pub pages_with_text: u32,
}

impl ExtractedText {
    /// Create an empty accumulator for a document with `page_count` pages.
    pub fn new(page_count: u32) -> Self {
        Self {
            text: String::new(),
            page_count,
            pages_with_text: 0,
        }
    }

    /// Append the text of one page.
    pub fn push_page(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
        self.pages_with_text += 1;
    }

    /// True when no page contributed any text.
    pub fn is_empty(&self) -> bool {
        self.pages_with_text == 0
    }
}
