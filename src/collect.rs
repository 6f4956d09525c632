//! Collection driver: scans every discovered file and concatenates entries.
//!
//! A file that fails to scan is reported and skipped; entries from other
//! files are unaffected and the run continues.

use crate::discovery::SourceFile;
use crate::output::{display_path, Printer, Status};
use crate::parser::IncludeScanner;
use crate::types::ApiEntry;

/// A file that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub file: SourceFile,
    pub message: String,
}

/// Entries gathered from a set of files, in visitation order.
#[derive(Debug, Default)]
pub struct Collection {
    pub entries: Vec<ApiEntry>,
    /// Files scanned successfully (with or without entries).
    pub scanned: usize,
    pub failed: Vec<FileFailure>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scan each file in order, reporting progress through `printer`.
pub fn collect(files: &[SourceFile], scanner: &IncludeScanner, printer: &Printer) -> Collection {
    let mut collection = Collection::new();

    for file in files {
        printer.emit(Status::Parsing, &display_path(&file.path));

        match scanner.scan_file(&file.path, &file.name) {
            Ok(entries) => {
                collection.entries.extend(entries);
                collection.scanned += 1;
            }
            Err(e) => {
                printer.emit(Status::Failed, &format!("{}: {}", file.name, e));
                collection.failed.push(FileFailure {
                    file: file.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    collection
}
