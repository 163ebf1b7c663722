//! Sorted, fully sized directory listings.

use std::path::{Path, PathBuf};

use crate::entry::FsEntry;
use crate::error::WalkWarning;

/// The sorted, size-resolved children of one directory.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Directory that was listed.
    pub path: PathBuf,
    /// Entries, largest first.
    pub entries: Vec<FsEntry>,
    /// Warnings collected while sizing subdirectories.
    pub warnings: Vec<WalkWarning>,
}

/// One visible row of a rendered listing.
#[derive(Debug, Clone, Copy)]
pub struct DisplayRow<'a> {
    /// Selection index; only directories get one.
    pub index: Option<usize>,
    /// The entry shown on this row.
    pub entry: &'a FsEntry,
}

impl Listing {
    /// Build a listing, sorting the entries.
    pub fn new(path: impl Into<PathBuf>, mut entries: Vec<FsEntry>, warnings: Vec<WalkWarning>) -> Self {
        sort_entries(&mut entries);
        Self {
            path: path.into(),
            entries,
            warnings,
        }
    }

    /// Directory this listing describes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows as they are displayed.
    ///
    /// With `hide_empty`, entries ranking below one byte are dropped.
    /// Directories are numbered from 1 in display order.
    pub fn display_rows(&self, hide_empty: bool) -> Vec<DisplayRow<'_>> {
        let mut next_index = 1;
        self.entries
            .iter()
            .filter(|entry| !hide_empty || entry.size.rank() >= 1)
            .map(|entry| {
                let index = if entry.is_dir() {
                    let index = next_index;
                    next_index += 1;
                    Some(index)
                } else {
                    None
                };
                DisplayRow { index, entry }
            })
            .collect()
    }

    /// Find the directory shown with the given index.
    pub fn resolve_index(&self, index: usize, hide_empty: bool) -> Option<&FsEntry> {
        self.display_rows(hide_empty)
            .into_iter()
            .find(|row| row.index == Some(index))
            .map(|row| row.entry)
    }

    /// Sum of all known entry sizes.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().filter_map(|e| e.size.bytes()).sum()
    }
}

/// Sort entries largest first; equal sizes fall back to name order.
pub(crate) fn sort_entries(entries: &mut [FsEntry]) {
    entries.sort_by(|a, b| {
        b.size
            .rank()
            .cmp(&a.size.rank())
            .then_with(|| a.name.cmp(&b.name))
    });
}
