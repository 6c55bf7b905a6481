//! pagechunk CLI - page-aware document chunking
//!
//! Normalizes text extracted from PDF and plain-text documents and
//! splits it into overlapping chunks tagged with their source pages.
//!
//! # Examples
//!
//! ```bash
//! # Chunk a single document
//! pagechunk process report.pdf --show-chunks
//!
//! # Chunk a folder and write every chunk as JSON
//! pagechunk process ./docs --chunk-size 500 --chunk-overlap 100 -o chunks.json
//!
//! # Show configuration
//! pagechunk show-config --all
//! ```

use clap::Parser;
use pagechunk::cli::{init_tracing, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
