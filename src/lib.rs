//! pagechunk - page-aware chunking for document indexing
//!
//! Turns text extracted from paginated documents into overlapping,
//! page-tagged chunks ready for an embedding or indexing stage.
//!
//! # Architecture
//!
//! - **core**: the library
//!   - config, error, types, observer
//!   - ingest (normalizer, segmenter, extraction, pipeline)
//!
//! - **cli**: `pagechunk` command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use pagechunk::{DocumentPipeline, PageText, SegmentConfig};
//!
//! let pipeline = DocumentPipeline::new(SegmentConfig::new(6, 2)).unwrap();
//! let pages = vec![PageText::new(1, "AAAA"), PageText::new(2, "BBBB")];
//! let chunks = pipeline.process_document(&pages, "doc.pdf");
//!
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks[0].id, "doc.pdf_chunk_0");
//! ```

// Core library (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

pub use core::config::Config;
pub use core::error::{PagechunkError, Result};
pub use core::ingest;
pub use core::ingest::{ChunkSegmenter, DocumentPipeline, SegmentConfig, TextNormalizer};
pub use core::observer::{NoopObserver, PipelineObserver, TracingObserver};
pub use core::types::*;
