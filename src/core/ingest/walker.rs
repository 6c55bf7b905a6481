//! Document enumeration for directory batches.
//!
//! Lists the files of a directory whose names match the include
//! globs, in file-name order. Hidden directories, excluded paths and
//! files above the size cap are left out. Unreadable entries are
//! logged and skipped.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{PagechunkError, Result};

/// Finds the documents of a directory
#[derive(Debug, Clone)]
pub struct DocumentWalker {
    /// Globs a file name must match; empty accepts everything
    include: Vec<Pattern>,

    /// Globs that reject a file or a whole subdirectory
    exclude: Vec<Pattern>,

    max_bytes: u64,

    recursive: bool,
}

impl DocumentWalker {
    /// Build a non-recursive walker.
    ///
    /// Include globs are matched against the file name (also
    /// lowercased, so `*.pdf` accepts `REPORT.PDF`) and the full path.
    /// Exclude globs are matched against the full path.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if a glob does not parse
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include: compile_patterns(include_patterns, "include")?,
            exclude: compile_patterns(exclude_patterns, "exclude")?,
            max_bytes: (max_file_size_mb as u64).saturating_mul(1024 * 1024),
            recursive: false,
        })
    }

    /// Descend into subdirectories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Matching documents under `root`, ordered by file name
    ///
    /// # Errors
    ///
    /// `NotFound` if `root` is not a directory
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(PagechunkError::NotFound(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let depth = if self.recursive { usize::MAX } else { 1 };
        let entries = WalkDir::new(root)
            .max_depth(depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || self.enter(e));

        let files = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| self.within_size(entry))
            .map(DirEntry::into_path)
            .filter(|path| self.accepts(path))
            .collect();

        Ok(files)
    }

    /// Directories are entered unless hidden or excluded
    fn enter(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return true;
        }

        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        !hidden && !self.exclude.iter().any(|p| p.matches_path(entry.path()))
    }

    fn within_size(&self, entry: &DirEntry) -> bool {
        match entry.metadata() {
            Ok(metadata) if metadata.len() > self.max_bytes => {
                tracing::debug!(
                    "Skipping {:?}: {} bytes over the size cap",
                    entry.path(),
                    metadata.len()
                );
                false
            }
            _ => true,
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let lowered = name.to_lowercase();

        let included = self.include.is_empty()
            || self.include.iter().any(|p| {
                p.matches(&name) || p.matches(&lowered) || p.matches_path(path)
            });

        included && !self.exclude.iter().any(|p| p.matches_path(path))
    }
}

fn compile_patterns(patterns: Vec<String>, kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| {
            Pattern::new(&p).map_err(|e| {
                PagechunkError::InvalidConfiguration(format!("Invalid {kind} pattern '{p}': {e}"))
            })
        })
        .collect()
}
