//! Process command - chunk a document or a directory of documents

use crate::cli::output::{self, colors, format_elapsed, format_pages, preview};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::PagechunkError;
use crate::core::ingest::pipeline::source_name;
use crate::core::ingest::DocumentPipeline;
use crate::core::types::{CollectionReport, DocumentFailure};
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Document or directory to process
    pub path: PathBuf,

    /// Characters per chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks
    #[arg(long)]
    pub chunk_overlap: Option<usize>,

    /// Maximum chunks per document
    #[arg(long, value_parser = parse_positive, conflicts_with = "no_limit")]
    pub max_chunks: Option<usize>,

    /// Do not cap the number of chunks per document
    #[arg(long)]
    pub no_limit: bool,

    /// Descend into subdirectories
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Write all chunks as JSON to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print a preview of every chunk
    #[arg(long)]
    pub show_chunks: bool,

    /// Suppress per-document output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Processing result response
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub path: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_chunks: Option<usize>,
    pub documents_processed: usize,
    pub documents_failed: usize,
    pub chunks_created: usize,
    pub truncated: Vec<String>,
    pub failures: Vec<DocumentFailure>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Fold command-line flags into the loaded configuration
pub fn apply_overrides(args: &ProcessArgs, config: &mut Config) {
    if let Some(size) = args.chunk_size {
        config.chunking.chunk_size = size;
    }
    if let Some(overlap) = args.chunk_overlap {
        config.chunking.chunk_overlap = overlap;
    }
    if let Some(max) = args.max_chunks {
        config.chunking.max_chunks = max;
    }
    if args.no_limit {
        config.chunking.max_chunks = 0;
    }
    if args.recursive {
        config.input.recursive = true;
    }
}

/// Run the pipeline over `args.path`
///
/// A single file that cannot be extracted is an error; inside a
/// directory it is recorded as a failure and the batch continues.
pub fn build_report(
    args: &ProcessArgs,
    config: &Config,
) -> Result<CollectionReport, PagechunkError> {
    let pipeline = DocumentPipeline::from_config(config)?;

    if args.path.is_dir() {
        return pipeline.process_directory(&args.path);
    }

    let pages = pipeline.extract(&args.path)?;
    Ok(pipeline.process_collection([(source_name(&args.path), Ok(pages))]))
}

/// Write every document's chunks to `path` as pretty JSON
pub fn write_chunks(path: &Path, report: &CollectionReport) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &report.documents)?;
    writer.flush()
}

/// Execute the process command
pub fn execute(
    args: ProcessArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    apply_overrides(&args, &mut config);
    config.validate()?;
    config.log_config();

    let report = build_report(&args, &config)?;

    if let Some(path) = &args.output {
        write_chunks(path, &report)?;
    }

    let segment = config.segment_config();
    let response = ProcessResponse {
        path: args.path.display().to_string(),
        chunk_size: segment.chunk_size,
        chunk_overlap: segment.chunk_overlap,
        max_chunks: segment.max_chunks,
        documents_processed: report.processed_count(),
        documents_failed: report.failed_count(),
        chunks_created: report.total_chunks(),
        truncated: report.truncated.clone(),
        failures: report.failures.clone(),
        duration_ms: start.elapsed().as_millis() as u64,
        output: args.output.as_ref().map(|p| p.display().to_string()),
    };

    match format {
        OutputFormat::Human => print_human(&args, &report, &response),
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}

fn print_human(args: &ProcessArgs, report: &CollectionReport, response: &ProcessResponse) {
    if !args.quiet {
        for (source, chunks) in &report.documents {
            println!(
                "{}  {} chunks",
                colors::source(source),
                colors::count(chunks.len())
            );

            if args.show_chunks {
                for chunk in chunks {
                    println!(
                        "  {} [p. {}] {}",
                        colors::dim(&chunk.id),
                        colors::pages(&format_pages(&chunk.pages)),
                        preview(&chunk.text, 60)
                    );
                }
            }
        }
    }

    for source in &response.truncated {
        output::print_warning(&format!("{source} stopped at the chunk limit"));
    }
    for failure in &response.failures {
        output::print_failure(&failure.source, &failure.error);
    }

    output::print_done(&format!(
        "{} documents, {} chunks, {} failed ({})",
        response.documents_processed,
        response.chunks_created,
        response.documents_failed,
        format_elapsed(Duration::from_millis(response.duration_ms))
    ));

    if let Some(path) = &response.output {
        eprintln!("{} {}", colors::label("chunks written to"), path);
    }
}
