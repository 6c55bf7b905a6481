//! Core data types for pagechunk.
//!
//! Inputs (`PageText`), the transient per-document structures
//! (`NormalizedPage`, `PageSpan`), the `Chunk` output record and the
//! batch-level `CollectionReport`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw text of one page as handed over by an extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-indexed page number
    pub page_number: u32,

    /// Text exactly as extracted
    pub text: String,
}

impl PageText {
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// Page text after cleaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPage {
    pub page_number: u32,
    pub text: String,
}

/// Half-open character range `[start, end)` of the concatenated
/// stream owned by a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    pub start: usize,
    pub end: usize,
    pub page_number: u32,
}

impl PageSpan {
    /// True if `[start, end)` shares at least one position with this span
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        !(end <= self.start || start >= self.end)
    }
}

/// A single overlapping text segment of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Stable identifier, `{source}_chunk_{index}`
    pub id: String,

    /// Trimmed window text
    pub text: String,

    /// Owning document (file name)
    pub source: String,

    /// Sorted, deduplicated pages the window overlaps
    pub pages: Vec<u32>,

    /// Sequential chunk number within the document
    pub index: usize,

    /// Character offset where the window starts (before trimming)
    pub start: usize,

    /// Character offset where the window ends (before trimming)
    pub end: usize,
}

impl Chunk {
    /// Build the identifier used for a chunk of `source` at `index`
    pub fn make_id(source: &str, index: usize) -> String {
        format!("{source}_chunk_{index}")
    }
}

/// A document that could not be processed in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFailure {
    /// Document identifier
    pub source: String,

    /// Rendered error message
    pub error: String,
}

/// Outcome of processing a collection of documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionReport {
    /// Chunks per successfully processed document, keyed by source
    pub documents: BTreeMap<String, Vec<Chunk>>,

    /// Documents that failed, in processing order
    pub failures: Vec<DocumentFailure>,

    /// Sources whose chunk list was cut at `max_chunks`
    pub truncated: Vec<String>,

    /// Wall-clock processing time in milliseconds
    pub duration_ms: u64,
}

impl CollectionReport {
    /// Total chunks across all successful documents
    pub fn total_chunks(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    /// Number of documents that failed
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of documents that produced a chunk list
    pub fn processed_count(&self) -> usize {
        self.documents.len()
    }

    pub fn summary(&self) -> CollectionSummary {
        CollectionSummary {
            documents_processed: self.processed_count(),
            documents_failed: self.failed_count(),
            documents_truncated: self.truncated.len(),
            chunks_created: self.total_chunks(),
            duration_ms: self.duration_ms,
        }
    }
}

/// Counters describing a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub documents_processed: usize,
    pub documents_failed: usize,
    pub documents_truncated: usize,
    pub chunks_created: usize,
    pub duration_ms: u64,
}
