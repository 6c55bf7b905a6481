//! Pipeline event sink.
//!
//! Every pipeline event goes to the [`PipelineObserver`] the caller
//! hands in; [`TracingObserver`] forwards events to `tracing`,
//! [`NoopObserver`] drops them. The extractors, the directory walker
//! and `Config::log_config` write their own diagnostics to `tracing`
//! directly; they stay silent unless a subscriber is installed.

use std::path::Path;

use crate::core::error::PagechunkError;
use crate::core::types::CollectionSummary;

/// Receives notable events from document processing.
///
/// Every method has an empty default so implementors only override
/// what they care about.
pub trait PipelineObserver: Send + Sync {
    /// A directory walk selected `count` documents under `root`
    fn documents_found(&self, _root: &Path, _count: usize) {}

    /// A document produced its chunk list
    fn document_processed(&self, _source: &str, _chunks: usize) {}

    /// A document hit `max_chunks` and was cut short
    fn document_truncated(&self, _source: &str, _max_chunks: usize) {}

    /// A document failed and was left out of a batch
    fn document_failed(&self, _source: &str, _error: &PagechunkError) {}

    /// A batch finished
    fn collection_finished(&self, _summary: &CollectionSummary) {}
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that reports events as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn documents_found(&self, root: &Path, count: usize) {
        tracing::info!("Found {} documents in {:?}", count, root);
    }

    fn document_processed(&self, source: &str, chunks: usize) {
        tracing::debug!(source, chunks, "Processed document");
    }

    fn document_truncated(&self, source: &str, max_chunks: usize) {
        tracing::warn!(
            source,
            max_chunks,
            "Reached max chunks limit ({}) for document {}",
            max_chunks,
            source
        );
    }

    fn document_failed(&self, source: &str, error: &PagechunkError) {
        tracing::error!(source, "Failed to process {}: {}", source, error);
    }

    fn collection_finished(&self, summary: &CollectionSummary) {
        tracing::info!(
            "Processed {} documents ({} failed, {} truncated), \
             total {} chunks in {}ms",
            summary.documents_processed,
            summary.documents_failed,
            summary.documents_truncated,
            summary.chunks_created,
            summary.duration_ms
        );
    }
}
