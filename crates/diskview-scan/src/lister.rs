//! Listing of a single directory's immediate children.

use std::fs;
use std::path::Path;

use tracing::debug;

use diskview_core::{EntrySize, FsEntry, ListError};

/// Reads one directory level without descending.
///
/// Files get their size from their own metadata; directories are left
/// pending for the aggregator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryLister;

impl DirectoryLister {
    /// Create a new lister.
    pub fn new() -> Self {
        Self
    }

    /// List the immediate children of `path`.
    ///
    /// Fails if the directory itself cannot be opened or iterated.
    pub fn list(&self, path: &Path) -> Result<Vec<FsEntry>, ListError> {
        let read_dir = fs::read_dir(path).map_err(|e| ListError::io(path, e))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| ListError::io(path, e))?;
            let name = dir_entry.file_name();

            // file_type() does not follow symlinks
            let is_dir = dir_entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            let entry = if is_dir {
                FsEntry::directory(path, name)
            } else {
                let size = match dir_entry.metadata() {
                    Ok(metadata) => EntrySize::Known(metadata.len()),
                    Err(err) => EntrySize::Unavailable(err.to_string()),
                };
                FsEntry::file(path, name, size)
            };
            entries.push(entry);
        }

        debug!(path = %path.display(), count = entries.len(), "Directory listed");
        Ok(entries)
    }
}
