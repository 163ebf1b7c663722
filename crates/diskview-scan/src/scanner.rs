//! Composed "list and size a directory" operation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use diskview_core::{ListError, Listing};

use crate::aggregate::SizeAggregator;
use crate::lister::DirectoryLister;

/// Lists a directory, sizes its subdirectories, and sorts the result.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner {
    lister: DirectoryLister,
    aggregator: SizeAggregator,
}

impl DirectoryScanner {
    /// Scanner with one walk task per subdirectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner with an optional cap on concurrent walks.
    pub fn with_limit(max_concurrent_walks: Option<usize>) -> Self {
        Self {
            lister: DirectoryLister::new(),
            aggregator: SizeAggregator::with_limit(max_concurrent_walks),
        }
    }

    /// Produce the sorted, fully sized listing of `path`.
    ///
    /// Only returns once every subdirectory total is known.
    pub async fn scan(&self, path: &Path) -> Result<Listing, ListError> {
        let start = Instant::now();
        let lister = self.lister;
        let dir: PathBuf = path.to_path_buf();

        let mut entries = tokio::task::spawn_blocking(move || lister.list(&dir))
            .await
            .map_err(|e| ListError::TaskFailed {
                message: e.to_string(),
            })??;

        let warnings = self.aggregator.aggregate(&mut entries).await;
        let listing = Listing::new(path, entries, warnings);

        debug!(
            path = %path.display(),
            entries = listing.entries.len(),
            bytes = listing.total_bytes(),
            warnings = listing.warnings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Listing ready"
        );

        Ok(listing)
    }
}
