//! Opening and revealing directories in the desktop file manager.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Errors from launching the file manager.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The launcher could not be started.
    #[error("Failed to open {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The launcher ran but reported failure.
    #[error("{command} exited with {status}")]
    Status { command: String, status: ExitStatus },
}

/// Something that can show a directory to the user outside the terminal.
pub trait PathOpener {
    /// Open `path` with the platform's default handler.
    fn open(&self, path: &Path) -> Result<(), OpenError>;

    /// Show `path` selected inside its parent.
    fn reveal(&self, path: &Path) -> Result<(), OpenError>;
}

/// Opener backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl PathOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        open::that(path).map_err(|source| OpenError::Launch {
            path: path.to_path_buf(),
            source,
        })
    }

    fn reveal(&self, path: &Path) -> Result<(), OpenError> {
        reveal_with_system(path)
    }
}

#[cfg(target_os = "macos")]
fn reveal_with_system(path: &Path) -> Result<(), OpenError> {
    let mut cmd = Command::new("open");
    cmd.arg("-R").arg(path);
    run_launcher(cmd, path)
}

#[cfg(target_os = "windows")]
fn reveal_with_system(path: &Path) -> Result<(), OpenError> {
    let mut arg = std::ffi::OsString::from("/select,");
    arg.push(path.as_os_str());
    let mut cmd = Command::new("explorer");
    cmd.arg(arg);
    // explorer.exe returns 1 even on success
    cmd.status().map(|_| ()).map_err(|source| OpenError::Launch {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn reveal_with_system(path: &Path) -> Result<(), OpenError> {
    // No portable "select in file manager"; show the parent instead
    let parent = path.parent().unwrap_or(path);
    open::that(parent).map_err(|source| OpenError::Launch {
        path: parent.to_path_buf(),
        source,
    })
}

/// Run a launcher command and map a non-zero exit to an error.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn run_launcher(mut cmd: Command, path: &Path) -> Result<(), OpenError> {
    let status = cmd.status().map_err(|source| OpenError::Launch {
        path: path.to_path_buf(),
        source,
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(OpenError::Status {
            command: format!("{cmd:?}"),
            status,
        })
    }
}
