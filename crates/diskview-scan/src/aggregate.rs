//! Concurrent per-subdirectory size aggregation.
//!
//! Every directory entry gets its own task walking its subtree. Results come
//! back through a single channel; the merge only starts once every task has
//! dropped its sender.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, warn};

use diskview_core::{FsEntry, WalkWarning};

use crate::walker::{SubtreeTotal, TreeWalker};

/// Outcome of one subdirectory task.
#[derive(Debug, Clone)]
pub struct SizeResult {
    /// Subdirectory that was walked.
    pub path: PathBuf,
    /// Its totals.
    pub total: SubtreeTotal,
}

/// Fans subtree walks out over tasks and merges their totals.
#[derive(Debug, Clone, Default)]
pub struct SizeAggregator {
    walker: TreeWalker,
    limit: Option<Arc<Semaphore>>,
}

impl SizeAggregator {
    /// One task per subdirectory, no cap.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// At most `max` walks running at the same time.
    pub fn bounded(max: usize) -> Self {
        Self {
            walker: TreeWalker::new(),
            limit: Some(Arc::new(Semaphore::new(max.max(1)))),
        }
    }

    /// Build from an optional cap.
    pub fn with_limit(max: Option<usize>) -> Self {
        match max {
            Some(max) => Self::bounded(max),
            None => Self::unbounded(),
        }
    }

    /// Resolve the size of every pending directory in `entries`.
    ///
    /// Returns the warnings of all walks. Directories whose task never
    /// reported resolve to zero with a warning.
    pub async fn aggregate(&self, entries: &mut [FsEntry]) -> Vec<WalkWarning> {
        let (tx, mut rx) = mpsc::unbounded_channel::<SizeResult>();

        let mut spawned = 0usize;
        for entry in entries.iter().filter(|e| e.is_dir() && e.is_pending()) {
            let tx = tx.clone();
            let path = entry.full_path.clone();
            let walker = self.walker;
            let limit = self.limit.clone();

            tokio::spawn(async move {
                let _permit = match limit {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                let walk_path = path.clone();
                let total = match tokio::task::spawn_blocking(move || walker.walk(&walk_path)).await {
                    Ok(total) => total,
                    Err(err) => SubtreeTotal {
                        warnings: vec![WalkWarning::task_lost(&path, &err.to_string())],
                        ..SubtreeTotal::default()
                    },
                };

                // Receiver is gone if the listing was abandoned
                let _ = tx.send(SizeResult { path, total });
            });
            spawned += 1;
        }
        drop(tx);

        let mut results = Vec::with_capacity(spawned);
        while let Some(result) = rx.recv().await {
            results.push(result);
        }

        debug!(spawned, reported = results.len(), "Size tasks joined");
        merge(entries, results)
    }
}

/// Publish each result into the entry with the same path.
fn merge(entries: &mut [FsEntry], results: Vec<SizeResult>) -> Vec<WalkWarning> {
    let mut warnings = Vec::new();

    for result in results {
        if let Some(entry) = entries
            .iter_mut()
            .find(|e| e.is_dir() && e.full_path == result.path)
        {
            entry.resolve(result.total.bytes);
        }
        warnings.extend(result.total.warnings);
    }

    for entry in entries.iter_mut().filter(|e| e.is_dir() && e.is_pending()) {
        warn!(path = %entry.full_path.display(), "Size task did not report");
        warnings.push(WalkWarning::task_lost(&entry.full_path, "no result"));
        entry.resolve(0);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use diskview_core::EntrySize;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Vec<FsEntry>) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for (dir, size) in [("a", 10usize), ("b", 200), ("c", 0)] {
            fs::create_dir(root.join(dir)).unwrap();
            if size > 0 {
                fs::write(root.join(dir).join("data"), vec![0u8; size]).unwrap();
            }
        }
        fs::create_dir(root.join("a/nested")).unwrap();
        fs::write(root.join("a/nested/more"), vec![0u8; 5]).unwrap();

        let entries = ["a", "b", "c"]
            .into_iter()
            .map(|name| FsEntry::directory(root, name))
            .collect();
        (temp, entries)
    }

    fn size_of<'a>(entries: &'a [FsEntry], name: &str) -> &'a EntrySize {
        &entries.iter().find(|e| e.name.as_str() == name).unwrap().size
    }

    #[tokio::test]
    async fn test_unbounded_aggregation() {
        let (_temp, mut entries) = fixture();
        let warnings = SizeAggregator::unbounded().aggregate(&mut entries).await;

        assert!(warnings.is_empty());
        assert_eq!(size_of(&entries, "a"), &EntrySize::Known(15));
        assert_eq!(size_of(&entries, "b"), &EntrySize::Known(200));
        assert_eq!(size_of(&entries, "c"), &EntrySize::Known(0));
    }

    #[tokio::test]
    async fn test_bounded_matches_unbounded() {
        let (_temp, mut unbounded) = fixture();
        let mut bounded = unbounded.clone();

        SizeAggregator::unbounded().aggregate(&mut unbounded).await;
        SizeAggregator::bounded(1).aggregate(&mut bounded).await;

        assert_eq!(unbounded, bounded);
    }

    #[tokio::test]
    async fn test_files_untouched() {
        let temp = TempDir::new().unwrap();
        let mut entries = vec![FsEntry::file(temp.path(), "f", EntrySize::Known(7))];
        let warnings = SizeAggregator::unbounded().aggregate(&mut entries).await;

        assert!(warnings.is_empty());
        assert_eq!(entries[0].size, EntrySize::Known(7));
    }

    #[tokio::test]
    async fn test_vanished_directory_resolves_to_zero() {
        let temp = TempDir::new().unwrap();
        let mut entries = vec![FsEntry::directory(temp.path(), "gone")];
        let warnings = SizeAggregator::unbounded().aggregate(&mut entries).await;

        assert_eq!(entries[0].size, EntrySize::Known(0));
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_merge_resolves_missing_results() {
        let mut entries = vec![
            FsEntry::directory(Path::new("/r"), "x"),
            FsEntry::directory(Path::new("/r"), "y"),
        ];
        let results = vec![SizeResult {
            path: PathBuf::from("/r/x"),
            total: SubtreeTotal {
                bytes: 9,
                ..SubtreeTotal::default()
            },
        }];

        let warnings = merge(&mut entries, results);
        assert_eq!(entries[0].size, EntrySize::Known(9));
        assert_eq!(entries[1].size, EntrySize::Known(0));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, PathBuf::from("/r/y"));
    }
}
