//! Config command - show current configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where configuration files are looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_config_file: Option<String>,
    pub chunking: ChunkingView,
    pub input: InputView,
}

#[derive(Debug, Serialize)]
pub struct ChunkingView {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub step: usize,
    pub max_chunks: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct InputView {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    pub recursive: bool,
}

impl ConfigResponse {
    pub fn from_config(config: &Config, all: bool) -> Self {
        let segment = config.segment_config();

        Self {
            user_config_file: all
                .then(Config::user_config_file)
                .flatten()
                .map(|p| p.display().to_string()),
            chunking: ChunkingView {
                chunk_size: segment.chunk_size,
                chunk_overlap: segment.chunk_overlap,
                step: segment.step(),
                max_chunks: segment.max_chunks,
            },
            input: InputView {
                include_patterns: config.input.include_patterns.clone(),
                exclude_patterns: config.input.exclude_patterns.clone(),
                max_file_size_mb: config.input.max_file_size_mb,
                recursive: config.input.recursive,
            },
        }
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::from_config(config, args.all);

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            if let Some(path) = &response.user_config_file {
                println!("  user_config_file: {path}");
            }
            println!("  chunking:");
            println!("    chunk_size: {}", response.chunking.chunk_size);
            println!("    chunk_overlap: {}", response.chunking.chunk_overlap);
            println!("    step: {}", response.chunking.step);
            match response.chunking.max_chunks {
                Some(max) => println!("    max_chunks: {max}"),
                None => println!("    max_chunks: unlimited"),
            }
            println!("  input:");
            println!(
                "    include_patterns: {:?}",
                response.input.include_patterns
            );
            println!(
                "    exclude_patterns: {:?}",
                response.input.exclude_patterns
            );
            println!("    max_file_size_mb: {}", response.input.max_file_size_mb);
            println!("    recursive: {}", response.input.recursive);
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
