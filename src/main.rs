//! diskview - interactive per-directory disk usage explorer.
//!
//! Usage:
//!   diskview           Explore from the filesystem root
//!   diskview [PATH]    Explore from PATH
//!   diskview --help    Show help

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::eyre::{Result, WrapErr, bail};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use diskview_core::ExplorerConfig;

#[derive(Parser)]
#[command(
    name = "diskview",
    version,
    about = "Interactive per-directory disk usage explorer",
    long_about = "diskview lists the children of a directory, largest first, with each \
                  subdirectory sized by the total of every file below it.\n\n\
                  Type a directory's number to enter it, \"..\" to go up, \".\" to \
                  refresh, \"open\" or \"reveal\" to show it in the file manager, and \
                  \"q\" (or Ctrl+C) to quit."
)]
struct Cli {
    /// Directory to start in (defaults to the filesystem root)
    path: Option<PathBuf>,

    /// Anything beyond PATH is rejected
    #[arg(hide = true)]
    extra: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if let Err(err) = color_eyre::install() {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    setup_logging();

    println!("Initializing...");

    let config = ExplorerConfig::default();
    let start = match resolve_start(&cli, &config.root_path) {
        Ok(start) => start,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Cannot get start path: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match diskview_tui::run(start, config) {
        Ok(reason) => {
            info!(?reason, "Exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

/// Work out the start directory from the command line.
///
/// No argument means the root; a given path must be a readable directory
/// and is made absolute.
fn resolve_start(cli: &Cli, root: &Path) -> Result<PathBuf> {
    if !cli.extra.is_empty() {
        bail!("invalid number of arguments, expected 0-1");
    }

    let Some(path) = &cli.path else {
        return Ok(root.to_path_buf());
    };

    let metadata = std::fs::metadata(path)
        .wrap_err_with(|| format!("Cannot access {}", path.display()))?;
    if !metadata.is_dir() {
        bail!("the path is not a directory: {}", path.display());
    }
    std::fs::read_dir(path).wrap_err_with(|| format!("Cannot read {}", path.display()))?;

    path.canonicalize().wrap_err("Invalid path")
}

/// Log to stderr; quiet unless RUST_LOG asks for more.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
