//! JWalk-based subtree walker.

use std::path::Path;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use diskview_core::{WalkWarning, WarningKind};

/// Totals for one walked subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtreeTotal {
    /// Sum of all regular file sizes.
    pub bytes: u64,
    /// Number of regular files counted.
    pub files: u64,
    /// Number of directories visited below the root.
    pub dirs: u64,
    /// Paths that could not be read.
    pub warnings: Vec<WalkWarning>,
}

/// Walks a subtree and totals the sizes of its regular files.
///
/// Symlinks are not followed and hidden entries are included. Each walk is
/// serial; concurrency comes from running one walk per subdirectory.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeWalker;

impl TreeWalker {
    /// Create a new walker.
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and total every regular file below it.
    pub fn walk(&self, root: &Path) -> SubtreeTotal {
        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(false);

        let mut total = SubtreeTotal::default();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_else(|| root.to_path_buf());
                    total.warnings.push(walk_warning(&path, &err));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                if entry.depth() > 0 {
                    total.dirs += 1;
                }
                // jwalk yields unreadable directories and keeps the failure on the entry
                if let Some(err) = &entry.read_children_error {
                    total.warnings.push(walk_warning(&entry.path(), err));
                }
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => {
                    total.bytes += metadata.len();
                    total.files += 1;
                }
                Err(err) => {
                    let path = entry.path();
                    warn!(path = %path.display(), "Cannot read metadata: {err}");
                    total.warnings.push(WalkWarning::new(
                        path,
                        err.to_string(),
                        WarningKind::MetadataError,
                    ));
                }
            }
        }

        debug!(
            root = %root.display(),
            bytes = total.bytes,
            files = total.files,
            warnings = total.warnings.len(),
            "Subtree walked"
        );

        total
    }
}

fn walk_warning(path: &Path, err: &jwalk::Error) -> WalkWarning {
    let warning = match err.io_error() {
        Some(io) => WalkWarning::from_io(path, io),
        None => WalkWarning::new(path, err.to_string(), WarningKind::ReadError),
    };
    warn!(path = %path.display(), "{}", warning.message);
    warning
}
