//! Directory entry types.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use compact_str::CompactString;

/// Kind of a listed entry. Fixed when the entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file, symlink, or any other non-directory.
    File,
    /// Directory whose size is the total of its subtree.
    Directory,
}

/// Size state of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySize {
    /// Directory not yet resolved by the aggregator.
    Pending,
    /// Size in bytes.
    Known(u64),
    /// Metadata could not be read.
    Unavailable(String),
}

impl EntrySize {
    /// Signed rank used for ordering and display filtering.
    ///
    /// Unavailable sizes rank below every known size, pending sizes as zero.
    pub fn rank(&self) -> i128 {
        match self {
            Self::Known(bytes) => i128::from(*bytes),
            Self::Pending => 0,
            Self::Unavailable(_) => -1,
        }
    }

    /// Size in bytes, if known.
    pub fn bytes(&self) -> Option<u64> {
        match self {
            Self::Known(bytes) => Some(*bytes),
            _ => None,
        }
    }
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    /// Base name for display. Lossy if the name is not valid UTF-8.
    pub name: CompactString,
    /// `parent_path` joined with the raw file name.
    pub full_path: PathBuf,
    /// Directory the entry was listed from.
    pub parent_path: PathBuf,
    /// File or directory.
    pub kind: EntryKind,
    /// Current size state.
    pub size: EntrySize,
}

impl FsEntry {
    /// Create a file entry with a size taken from its metadata.
    pub fn file(parent: &Path, name: impl AsRef<OsStr>, size: EntrySize) -> Self {
        Self::new(parent, name.as_ref(), EntryKind::File, size)
    }

    /// Create a directory entry awaiting aggregation.
    pub fn directory(parent: &Path, name: impl AsRef<OsStr>) -> Self {
        Self::new(parent, name.as_ref(), EntryKind::Directory, EntrySize::Pending)
    }

    fn new(parent: &Path, name: &OsStr, kind: EntryKind, size: EntrySize) -> Self {
        Self {
            name: CompactString::new(name.to_string_lossy()),
            full_path: parent.join(name),
            parent_path: parent.to_path_buf(),
            kind,
            size,
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Check if the size is still pending.
    pub fn is_pending(&self) -> bool {
        matches!(self.size, EntrySize::Pending)
    }

    /// Publish the aggregated size of a directory.
    ///
    /// Only a pending directory accepts a size; returns `false` otherwise.
    pub fn resolve(&mut self, bytes: u64) -> bool {
        if self.is_dir() && self.is_pending() {
            self.size = EntrySize::Known(bytes);
            true
        } else {
            false
        }
    }
}
