//! Interactive terminal explorer for diskview.
//!
//! The explorer shows the children of one directory, largest first, and
//! reads one command per line from stdin:
//!
//! - a directory's number - enter it
//! - `..` - go to the parent
//! - `.` - list again
//! - `open` / `finder` - open the directory in the file manager
//! - `reveal` - reveal the directory in the file manager
//! - `q`, `quit`, `exit`, `bye` - quit
//!
//! Ctrl-C (SIGINT) or SIGTERM quits as well.
//!
//! # Usage
//!
//! ```rust,no_run
//! use diskview_core::ExplorerConfig;
//! use std::path::PathBuf;
//!
//! diskview_tui::run(PathBuf::from("/var"), ExplorerConfig::default()).unwrap();
//! ```

pub mod app;
pub mod event;
pub mod opener;
pub mod ui;

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

use diskview_core::ExplorerConfig;

pub use app::state::ExitReason;
pub use app::{AppResult, Explorer};
pub use opener::{OpenError, PathOpener, SystemOpener};
pub use ui::{Presenter, RowLayout, TerminalPresenter};

/// Run the explorer on the terminal, starting at `start`.
pub fn run(start: PathBuf, config: ExplorerConfig) -> AppResult<ExitReason> {
    let rt = tokio::runtime::Runtime::new()?;

    let result = rt.block_on(run_session(start, config));

    // Walks of abandoned listings may still be running; don't wait for them
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}

/// Wire stdin and signals to an explorer and run it to completion.
async fn run_session(start: PathBuf, config: ExplorerConfig) -> AppResult<ExitReason> {
    let cancel = CancellationToken::new();
    let (commands, reader) = event::spawn_stdin_reader(cancel.clone());
    let (signals, relay) = event::spawn_signal_relay(cancel.clone())?;

    let layout = RowLayout {
        index_width: config.index_width,
        name_width: config.name_width,
    };
    let mut explorer = Explorer::new(config, TerminalPresenter::stdout(layout), SystemOpener);
    let result = explorer.run(start, commands, signals).await;

    cancel.cancel();
    let _ = reader.await;
    let _ = relay.await;

    result
}
