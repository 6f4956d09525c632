//! File system scanner for discovering include files.
//!
//! Recursively walks a directory and keeps the files whose extension the
//! manifest asks for.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// A discovered file with the name stamped on its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name without directories (e.g. `clients.inc`).
    pub name: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

/// Scan a directory for include files.
///
/// Entries are visited in file-name order within each directory so the
/// output is deterministic across platforms.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<SourceFile> {
    if !root.exists() {
        return Vec::new();
    }

    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let relative = e.path().strip_prefix(root).unwrap_or(e.path());
            !manifest.is_excluded(relative)
        })
        .filter(|e| manifest.matches_extension(e.path()))
        .map(|e| SourceFile::new(e.path()))
        .collect()
}
