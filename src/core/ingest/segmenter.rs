//! Sliding-window segmentation of paginated text.
//!
//! Pages are sorted, normalized and concatenated into one stream
//! (see [`PageMap`]); a fixed-size window then slides across the
//! stream with the configured overlap. Every window becomes a
//! [`Chunk`] tagged with the pages it overlaps.
//!
//! All sizes are measured in **characters**, not bytes, so windows
//! never split a multi-byte sequence.
//!
//! # Example
//!
//! ```
//! use pagechunk::ingest::{ChunkSegmenter, SegmentConfig};
//! use pagechunk::PageText;
//!
//! let segmenter = ChunkSegmenter::new(SegmentConfig::new(6, 2)).unwrap();
//! let pages = vec![PageText::new(2, "BBBB"), PageText::new(1, "AAAA")];
//! let result = segmenter.segment(&pages, "doc.pdf");
//!
//! let starts: Vec<usize> = result.chunks.iter().map(|c| c.start).collect();
//! assert_eq!(starts, vec![0, 4, 8]);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{PagechunkError, Result};
use crate::core::ingest::normalizer::TextNormalizer;
use crate::core::ingest::page_map::PageMap;
use crate::core::types::{Chunk, NormalizedPage, PageText};

/// Window geometry for segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Characters per chunk
    pub chunk_size: usize,

    /// Characters shared by consecutive chunks
    pub chunk_overlap: usize,

    /// Hard cap on chunks per document
    pub max_chunks: Option<usize>,
}

impl SegmentConfig {
    /// Uncapped configuration
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            max_chunks: None,
        }
    }

    pub fn with_max_chunks(mut self, max_chunks: Option<usize>) -> Self {
        self.max_chunks = max_chunks;
        self
    }

    /// Distance between consecutive window starts
    pub fn step(&self) -> usize {
        self.chunk_size.saturating_sub(self.chunk_overlap)
    }

    /// Reject configurations that could not make progress
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(PagechunkError::InvalidConfiguration(
                "chunk_size must be greater than 0".to_string(),
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(PagechunkError::InvalidConfiguration(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        if self.max_chunks == Some(0) {
            return Err(PagechunkError::InvalidConfiguration(
                "max_chunks must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            chunk_size: 800,
            chunk_overlap: 200,
            max_chunks: Some(500),
        }
    }
}

/// Chunks of one document plus how the run ended
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    pub chunks: Vec<Chunk>,

    /// The window stopped at `max_chunks` with stream left over
    pub truncated: bool,

    /// Length of the concatenated stream in characters
    pub stream_len: usize,
}

/// Splits a document's pages into overlapping, page-tagged chunks.
#[derive(Debug, Clone)]
pub struct ChunkSegmenter {
    config: SegmentConfig,
    normalizer: TextNormalizer,
}

impl ChunkSegmenter {
    /// Create a segmenter, validating the window geometry first.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `chunk_size` is 0, if
    /// `chunk_overlap >= chunk_size`, or if `max_chunks` is `Some(0)`.
    pub fn new(config: SegmentConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            normalizer: TextNormalizer::new(),
        })
    }

    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Sort pages by number (stable) and clean each one
    pub fn normalize_pages(&self, pages: &[PageText]) -> Vec<NormalizedPage> {
        let mut ordered: Vec<&PageText> = pages.iter().collect();
        ordered.sort_by_key(|p| p.page_number);

        ordered
            .into_iter()
            .map(|p| NormalizedPage {
                page_number: p.page_number,
                text: self.normalizer.normalize(&p.text),
            })
            .collect()
    }

    /// Chunk one document.
    ///
    /// Window `i` covers `[i * step, min(i * step + chunk_size, len))`
    /// of the stream, where `step = chunk_size - chunk_overlap`. The
    /// emitted text is trimmed; `start`/`end` are not.
    ///
    /// Windows only start before the end of the last page's text, so
    /// trailing separators never form a chunk of their own. A chunk can
    /// still be page-less if it falls wholly inside the separators of
    /// blank pages.
    pub fn segment(&self, pages: &[PageText], source: &str) -> Segmentation {
        let map = PageMap::build(&self.normalize_pages(pages));
        self.segment_map(&map, source)
    }

    /// Chunk an already assembled stream
    pub fn segment_map(&self, map: &PageMap, source: &str) -> Segmentation {
        let stream_len = map.len();
        let content_end = map.content_end();
        let step = self.config.step();

        let mut chunks = Vec::new();
        let mut truncated = false;
        let mut start = 0;

        while start < content_end {
            let end = start.saturating_add(self.config.chunk_size).min(stream_len);
            let index = chunks.len();

            chunks.push(Chunk {
                id: Chunk::make_id(source, index),
                text: map.slice(start, end).trim().to_string(),
                source: source.to_string(),
                pages: map.pages_for_range(start, end),
                index,
                start,
                end,
            });

            start = start.saturating_add(step);

            if let Some(max_chunks) = self.config.max_chunks {
                if chunks.len() >= max_chunks {
                    truncated = start < content_end;
                    break;
                }
            }
        }

        Segmentation {
            chunks,
            truncated,
            stream_len,
        }
    }
}
