//! Concatenated page stream and its page spans.
//!
//! Pages are appended in page-number order, each followed by a
//! single separator space that belongs to no page. A page that is
//! empty after cleaning still adds its separator, so offsets match
//! `text + " "` per page, but it gets no span: a chunk is never
//! tagged with a page it holds no text from. Offsets are counted in
//! characters, so multi-byte text never shifts a span.

use crate::core::types::{NormalizedPage, PageSpan};

/// Character inserted after every page
pub const PAGE_SEPARATOR: char = ' ';

/// The stream of all pages of a document plus the span each page owns.
#[derive(Debug, Clone, Default)]
pub struct PageMap {
    /// Stream as characters, for O(1) window slicing
    stream: Vec<char>,

    /// Spans in stream order
    spans: Vec<PageSpan>,
}

impl PageMap {
    /// Build the stream from pages already sorted by page number
    pub fn build(pages: &[NormalizedPage]) -> Self {
        let mut stream = Vec::new();
        let mut spans = Vec::with_capacity(pages.len());

        for page in pages {
            if !page.text.is_empty() {
                let start = stream.len();
                stream.extend(page.text.chars());
                spans.push(PageSpan {
                    start,
                    end: stream.len(),
                    page_number: page.page_number,
                });
            }
            stream.push(PAGE_SEPARATOR);
        }

        Self { stream, spans }
    }

    /// Stream length in characters, separators included
    pub fn len(&self) -> usize {
        self.stream.len()
    }

    /// Offset just past the last page character (trailing
    /// separators excluded)
    pub fn content_end(&self) -> usize {
        self.spans.last().map(|s| s.end).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    pub fn spans(&self) -> &[PageSpan] {
        &self.spans
    }

    /// Text of `[start, end)`; out-of-range bounds are clamped
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.stream.len());
        let start = start.min(end);
        self.stream[start..end].iter().collect()
    }

    /// Whole stream as a string
    pub fn text(&self) -> String {
        self.stream.iter().collect()
    }

    /// Sorted, deduplicated page numbers whose span intersects
    /// `[start, end)`
    pub fn pages_for_range(&self, start: usize, end: usize) -> Vec<u32> {
        let mut pages: Vec<u32> = self
            .spans
            .iter()
            .filter(|span| span.intersects(start, end))
            .map(|span| span.page_number)
            .collect();
        pages.sort_unstable();
        pages.dedup();
        pages
    }
}
