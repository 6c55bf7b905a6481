//! Core chunking library (no I/O beyond document extraction)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Pages, spans, chunks and batch reports
//! - **observer**: Injected event sink for pipeline events
//! - **ingest**: Normalization, segmentation and the pipeline

pub mod config;
pub mod error;
pub mod ingest;
pub mod observer;
pub mod types;

pub use config::Config;
pub use error::{PagechunkError, Result};
