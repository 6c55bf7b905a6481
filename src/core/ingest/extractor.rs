//! Page text extraction.
//!
//! Extractors turn a document on disk into 1-indexed [`PageText`]
//! values. A missing file is `NotFound`; a file that exists but
//! cannot be decoded is `Unreadable`. Nothing here retries.

use std::fs;
use std::path::Path;

use crate::core::error::{PagechunkError, Result};
use crate::core::types::PageText;

/// Page break in plain-text documents
pub const FORM_FEED: char = '\x0C';

/// Source of per-page text for a document path
pub trait PageExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<Vec<PageText>>;
}

/// PDF extraction via `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<PageText>> {
        let bytes = read_document(path)?;

        // pdf-extract panics on some malformed files
        let extracted =
            std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
                .map_err(|_| PagechunkError::unreadable(display(path), "PDF parser panicked"))?
                .map_err(|e| PagechunkError::unreadable(display(path), e))?;

        let pages: Vec<PageText> = extracted
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageText::new(i as u32 + 1, text))
            .collect();
        tracing::debug!("Extracted text from {} pages in {:?}", pages.len(), path);
        Ok(pages)
    }
}

/// UTF-8 text files, pages separated by form feeds
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<PageText>> {
        let bytes = read_document(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| PagechunkError::unreadable(display(path), format!("not UTF-8: {e}")))?;
        Ok(split_pages(&text))
    }
}

/// Dispatches on file extension: `.pdf` and `.txt`
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeExtractor {
    pdf: PdfExtractor,
    text: PlainTextExtractor,
}

impl CompositeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extensions this extractor understands (lowercase)
    pub fn supported_extensions() -> &'static [&'static str] {
        &["pdf", "txt"]
    }
}

impl PageExtractor for CompositeExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<PageText>> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("pdf") => self.pdf.extract(path),
            Some("txt") => self.text.extract(path),
            other => {
                if !path.exists() {
                    return Err(PagechunkError::NotFound(display(path)));
                }
                Err(PagechunkError::unreadable(
                    display(path),
                    format!("unsupported document type: {}", other.unwrap_or("<none>")),
                ))
            }
        }
    }
}

/// Split extracted text on form feeds into 1-indexed pages.
///
/// A trailing form feed closes the last page rather than opening an
/// empty one. Text without page breaks is a single page.
pub fn split_pages(text: &str) -> Vec<PageText> {
    let body = text.strip_suffix(FORM_FEED).unwrap_or(text);

    body.split(FORM_FEED)
        .enumerate()
        .map(|(i, page)| PageText::new(i as u32 + 1, page))
        .collect()
}

fn read_document(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(PagechunkError::NotFound(display(path)));
    }

    fs::read(path).map_err(|e| PagechunkError::unreadable(display(path), e))
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
