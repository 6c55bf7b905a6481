//! Document processing pipeline.
//!
//! Composes normalization and segmentation for one document, and
//! runs a batch of documents with per-document failure isolation:
//! 1. Enumerate documents (directory mode)
//! 2. Extract page text
//! 3. Normalize and segment
//! 4. Collect chunks, failures and truncations into a report

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::core::config::{Config, InputConfig};
use crate::core::error::Result;
use crate::core::ingest::extractor::{CompositeExtractor, PageExtractor};
use crate::core::ingest::segmenter::{ChunkSegmenter, SegmentConfig};
use crate::core::ingest::walker::DocumentWalker;
use crate::core::observer::{PipelineObserver, TracingObserver};
use crate::core::types::{Chunk, CollectionReport, DocumentFailure, PageText};

/// Turns documents into chunk lists
#[derive(Clone)]
pub struct DocumentPipeline {
    segmenter: ChunkSegmenter,
    extractor: Arc<dyn PageExtractor>,
    walker: DocumentWalker,
    observer: Arc<dyn PipelineObserver>,
}

impl DocumentPipeline {
    /// Create a pipeline with the default extractor, walker and a
    /// `tracing`-backed observer
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the window geometry is invalid; no
    /// document is touched in that case
    pub fn new(config: SegmentConfig) -> Result<Self> {
        let input = InputConfig::default();
        let walker = DocumentWalker::new(
            input.include_patterns,
            input.exclude_patterns,
            input.max_file_size_mb,
        )?;

        Ok(Self {
            segmenter: ChunkSegmenter::new(config)?,
            extractor: Arc::new(CompositeExtractor::new()),
            walker,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Create a pipeline from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let walker = DocumentWalker::new(
            config.input.include_patterns.clone(),
            config.input.exclude_patterns.clone(),
            config.input.max_file_size_mb,
        )?
        .recursive(config.input.recursive);

        Ok(Self {
            segmenter: ChunkSegmenter::new(config.segment_config())?,
            extractor: Arc::new(CompositeExtractor::new()),
            walker,
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn PageExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_walker(mut self, walker: DocumentWalker) -> Self {
        self.walker = walker;
        self
    }

    pub fn segment_config(&self) -> &SegmentConfig {
        self.segmenter.config()
    }

    /// Chunk one document's pages
    ///
    /// Truncation at `max_chunks` is reported to the observer and
    /// the partial list is returned.
    pub fn process_document(&self, pages: &[PageText], source: &str) -> Vec<Chunk> {
        self.run_document(pages, source).0
    }

    /// Extract and chunk a single file; `source` is its file name
    ///
    /// # Errors
    ///
    /// Extraction errors (`NotFound`, `Unreadable`) propagate as-is
    pub fn process_file(&self, path: &Path) -> Result<Vec<Chunk>> {
        let pages = self.extract(path)?;
        Ok(self.process_document(&pages, &source_name(path)))
    }

    /// Page text of one document through the configured extractor
    pub fn extract(&self, path: &Path) -> Result<Vec<PageText>> {
        self.extractor.extract(path)
    }

    /// Chunk a batch of documents.
    ///
    /// Each item pairs a source name with the extraction outcome for
    /// that document. Failed documents are recorded in the report and
    /// reported to the observer; they never stop the batch.
    pub fn process_collection<I, S>(&self, documents: I) -> CollectionReport
    where
        I: IntoIterator<Item = (S, Result<Vec<PageText>>)>,
        S: Into<String>,
    {
        let start = Instant::now();
        let mut report = CollectionReport::default();

        for (source, pages) in documents {
            let source = source.into();

            match pages {
                Ok(pages) => {
                    let (chunks, truncated) = self.run_document(&pages, &source);
                    if truncated {
                        report.truncated.push(source.clone());
                    }
                    report.documents.insert(source, chunks);
                }
                Err(e) => {
                    self.observer.document_failed(&source, &e);
                    report.failures.push(DocumentFailure {
                        source,
                        error: e.to_string(),
                    });
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        self.observer.collection_finished(&report.summary());

        report
    }

    /// Extract and chunk every matching document in `dir`
    ///
    /// # Errors
    ///
    /// `NotFound` if `dir` is not a directory. Per-document errors
    /// end up in the report instead.
    pub fn process_directory(&self, dir: &Path) -> Result<CollectionReport> {
        let files = self.walker.collect(dir)?;
        self.observer.documents_found(dir, files.len());

        let documents = files.iter().map(|path| {
            let source = relative_source(dir, path);
            (source, self.extractor.extract(path))
        });

        Ok(self.process_collection(documents))
    }

    fn run_document(&self, pages: &[PageText], source: &str) -> (Vec<Chunk>, bool) {
        let segmentation = self.segmenter.segment(pages, source);

        if segmentation.truncated {
            if let Some(max_chunks) = self.segment_config().max_chunks {
                self.observer.document_truncated(source, max_chunks);
            }
        }
        self.observer
            .document_processed(source, segmentation.chunks.len());

        (segmentation.chunks, segmentation.truncated)
    }
}

/// File name of `path`, falling back to the full path
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Path relative to the batch root, so nested documents with equal
/// file names stay distinct
fn relative_source(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| source_name(path))
}
