//! Core types and configuration for diskview.
//!
//! This crate provides the data structures shared by the scanner and the
//! terminal front end: directory entries, sorted listings, error and
//! warning types, and the explorer configuration.

mod config;
mod entry;
mod error;
mod listing;

pub use config::{ExplorerConfig, ExplorerConfigBuilder};
pub use entry::{EntryKind, EntrySize, FsEntry};
pub use error::{ListError, WalkWarning, WarningKind};
pub use listing::{DisplayRow, Listing};
