//! Configuration management for pagechunk.
//!
//! Loads settings from a TOML file and environment variables, with
//! defaults for everything. Validation runs once, before any document
//! is touched.

use crate::core::error::{PagechunkError, Result};
use crate::core::ingest::SegmentConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "pagechunk.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Maximum chunks per document, 0 for no limit
    #[serde(default = "default_max_chunks")]
    pub max_chunks: usize,
}

/// Document input configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Document patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Paths to exclude (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Maximum document size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Descend into subdirectories when processing a directory
    #[serde(default)]
    pub recursive: bool,
}

fn default_chunk_size() -> usize {
    800
}

fn default_chunk_overlap() -> usize {
    200
}

fn default_max_chunks() -> usize {
    500
}

fn default_max_file_size() -> usize {
    50
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.pdf".to_string(), "*.txt".to_string()]
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            max_chunks: default_max_chunks(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            include_patterns: default_include_patterns(),
            exclude_patterns: Vec::new(),
            max_file_size_mb: default_max_file_size(),
            recursive: false,
        }
    }
}

impl ChunkingConfig {
    /// `max_chunks` as an optional cap
    pub fn max_chunks_limit(&self) -> Option<usize> {
        (self.max_chunks > 0).then_some(self.max_chunks)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            PagechunkError::InvalidConfiguration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user config file (`$XDG_CONFIG_HOME/pagechunk/config.toml`)
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pagechunk").join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. `PAGECHUNK_CONFIG` env var
    /// 2. User config file
    /// 3. `./pagechunk.toml`
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PAGECHUNK_CONFIG") {
            Self::from_file(config_path)?
        } else if let Some(user_file) = Self::user_config_file().filter(|p| p.exists()) {
            Self::from_file(user_file)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Unparseable values are rejected rather than ignored.
    pub fn merge_env(&mut self) -> Result<()> {
        if let Some(size) = env_usize("PAGECHUNK_CHUNK_SIZE")? {
            self.chunking.chunk_size = size;
        }
        if let Some(overlap) = env_usize("PAGECHUNK_CHUNK_OVERLAP")? {
            self.chunking.chunk_overlap = overlap;
        }
        if let Ok(max) = env::var("PAGECHUNK_MAX_CHUNKS") {
            self.chunking.max_chunks = if max.eq_ignore_ascii_case("none") {
                0
            } else {
                parse_usize("PAGECHUNK_MAX_CHUNKS", &max)?
            };
        }
        if let Some(size) = env_usize("PAGECHUNK_MAX_FILE_SIZE_MB")? {
            self.input.max_file_size_mb = size;
        }

        Ok(())
    }

    /// Window geometry for the segmenter
    pub fn segment_config(&self) -> SegmentConfig {
        SegmentConfig::new(self.chunking.chunk_size, self.chunking.chunk_overlap)
            .with_max_chunks(self.chunking.max_chunks_limit())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.segment_config().validate()?;

        if self.input.max_file_size_mb == 0 {
            return Err(PagechunkError::InvalidConfiguration(
                "Max file size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.chunking.chunk_size);
        tracing::info!("  Chunk overlap: {} chars", self.chunking.chunk_overlap);
        match self.chunking.max_chunks_limit() {
            Some(max) => tracing::info!("  Max chunks per document: {}", max),
            None => tracing::info!("  Max chunks per document: unlimited"),
        }
        tracing::info!(
            "  Include patterns: {:?}",
            self.input.include_patterns
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.input.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.input.max_file_size_mb);
        tracing::info!("  Recursive: {}", self.input.recursive);
    }
}

fn env_usize(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(value) => parse_usize(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_usize(name: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| {
        PagechunkError::InvalidConfiguration(format!(
            "{name} must be a non-negative integer, got '{value}'"
        ))
    })
}
