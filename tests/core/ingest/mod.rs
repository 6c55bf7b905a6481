//! Ingest layer tests
//!
//! Normalization, segmentation and batch processing.

mod test_properties;
mod test_scenarios;
