//! Explorer configuration.

use std::path::PathBuf;
use std::time::Duration;

use derive_builder::Builder;

/// Configuration for the interactive explorer.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ExplorerConfig {
    /// Fallback path used when the current directory cannot be listed.
    /// `..` is a no-op here.
    #[builder(default = "PathBuf::from(\"/\")")]
    pub root_path: PathBuf,

    /// Pause before falling back to the root after a listing failure.
    #[builder(default = "Duration::from_secs(5)")]
    pub fallback_delay: Duration,

    /// Pause after reporting a failed open/reveal.
    #[builder(default = "Duration::from_secs(3)")]
    pub error_pause: Duration,

    /// Pause after printing the farewell message.
    #[builder(default = "Duration::from_millis(100)")]
    pub farewell_pause: Duration,

    /// Maximum number of subtree walks running at once (None = one per subdirectory).
    #[builder(default)]
    pub max_concurrent_walks: Option<usize>,

    /// Width of the name column.
    #[builder(default = "64")]
    pub name_width: usize,

    /// Width of the index column.
    #[builder(default = "5")]
    pub index_width: usize,

    /// Omit entries smaller than one byte from the display.
    #[builder(default = "true")]
    pub hide_empty: bool,
}

impl ExplorerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root_path {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        }
        if let Some(Some(0)) = self.max_concurrent_walks {
            return Err("Concurrency cap must be at least 1".to_string());
        }
        if let Some(width) = self.name_width {
            if width < 4 {
                return Err("Name column must be at least 4 characters wide".to_string());
            }
        }
        Ok(())
    }
}

impl ExplorerConfig {
    /// Create a new config builder.
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::default()
    }

    /// Config with every pause set to zero, for scripted sessions.
    pub fn without_pauses() -> Self {
        Self {
            fallback_delay: Duration::ZERO,
            error_pause: Duration::ZERO,
            farewell_pause: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("/"),
            fallback_delay: Duration::from_secs(5),
            error_pause: Duration::from_secs(3),
            farewell_pause: Duration::from_millis(100),
            max_concurrent_walks: None,
            name_width: 64,
            index_width: 5,
            hide_empty: true,
        }
    }
}
