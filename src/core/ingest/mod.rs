//! Document ingestion: from raw page text to chunks.
//!
//! - **normalizer**: page text cleaning
//! - **page_map**: concatenated stream with per-page spans
//! - **segmenter**: sliding-window chunking with page mapping
//! - **extractor**: per-page text from PDF and text files
//! - **walker**: directory enumeration with glob filters
//! - **pipeline**: single-document and batch orchestration
//!
//! # Safety
//!
//! Offsets and window sizes count characters, not bytes, so
//! documents full of emojis or CJK text never split a code point.

pub mod extractor;
pub mod normalizer;
pub mod page_map;
pub mod pipeline;
pub mod segmenter;
pub mod walker;

pub use extractor::{
    split_pages, CompositeExtractor, PageExtractor, PdfExtractor, PlainTextExtractor,
};
pub use normalizer::{normalize, TextNormalizer};
pub use page_map::PageMap;
pub use pipeline::DocumentPipeline;
pub use segmenter::{ChunkSegmenter, SegmentConfig, Segmentation};
pub use walker::DocumentWalker;
