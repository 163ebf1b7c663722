//! Directory listing and size aggregation for diskview.
//!
//! # Overview
//!
//! `diskview-scan` turns one directory into a [`Listing`]:
//!
//! - [`DirectoryLister`] reads the immediate children
//! - [`SizeAggregator`] walks every subdirectory in its own task
//! - [`TreeWalker`] totals regular files below one subtree via jwalk
//! - [`DirectoryScanner`] composes the three and sorts the result
//!
//! # Example
//!
//! ```rust,no_run
//! use diskview_scan::DirectoryScanner;
//!
//! # async fn demo() -> Result<(), diskview_scan::ListError> {
//! let listing = DirectoryScanner::new().scan(std::path::Path::new("/var")).await?;
//! for entry in &listing.entries {
//!     println!("{} {:?}", entry.name, entry.size);
//! }
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod lister;
mod scanner;
mod walker;

pub use aggregate::{SizeAggregator, SizeResult};
pub use lister::DirectoryLister;
pub use scanner::DirectoryScanner;
pub use walker::{SubtreeTotal, TreeWalker};

// Re-export core types for convenience
pub use diskview_core::{EntryKind, EntrySize, FsEntry, ListError, Listing, WalkWarning, WarningKind};
