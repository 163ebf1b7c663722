//! The explorer control loop.

pub mod commands;
pub(crate) mod constants;
pub mod navigation;
pub mod state;

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use diskview_core::ExplorerConfig;
use diskview_scan::DirectoryScanner;

use crate::opener::PathOpener;
use crate::ui::Presenter;

use self::constants::{FAREWELL_MESSAGE, LIST_FAILED_MESSAGE, OPEN_FAILED_MESSAGE};
use self::state::{Effect, Event, ExitReason, NavState, Next, Transition};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Lists directories, shows them, and follows the user's commands.
pub struct Explorer<P, O> {
    config: ExplorerConfig,
    scanner: DirectoryScanner,
    presenter: P,
    opener: O,
}

impl<P: Presenter, O: PathOpener> Explorer<P, O> {
    /// Create an explorer.
    pub fn new(config: ExplorerConfig, presenter: P, opener: O) -> Self {
        let scanner = DirectoryScanner::with_limit(config.max_concurrent_walks);
        Self {
            config,
            scanner,
            presenter,
            opener,
        }
    }

    /// Consume the explorer, returning its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Run until a quit command, a termination signal, or end of input.
    ///
    /// Each cycle lists the current directory, shows it, then waits for
    /// whichever of `commands` and `terminate` produces an event first.
    pub async fn run(
        &mut self,
        start: PathBuf,
        mut commands: mpsc::Receiver<String>,
        mut terminate: mpsc::Receiver<()>,
    ) -> AppResult<ExitReason> {
        let mut state = NavState::new(self.config.root_path.clone(), start);
        info!(root = %state.root().display(), start = %state.current().display(), "Explorer started");

        loop {
            let listing = match self.scanner.scan(state.current()).await {
                Ok(listing) => listing,
                Err(err) => {
                    error!(path = %state.current().display(), "Cannot list directory: {err}");
                    let hint = format!(
                        "Switching to a fallback path in {:?}...",
                        self.config.fallback_delay
                    );
                    self.presenter
                        .show_error(LIST_FAILED_MESSAGE, &err.to_string(), &hint)?;
                    tokio::time::sleep(self.config.fallback_delay).await;
                    state = navigation::fallback(state);
                    continue;
                }
            };

            self.presenter.show_listing(&listing, self.config.hide_empty)?;

            let event = tokio::select! {
                line = commands.recv() => line.map_or(Event::InputClosed, Event::Command),
                Some(()) = terminate.recv() => Event::Terminate,
            };
            debug!(?event, "Event received");

            let Transition { next, effects } =
                navigation::transition(state, event, &listing, self.config.hide_empty);

            for effect in effects {
                self.apply(effect).await?;
            }

            match next {
                Next::Browse(next_state) => state = next_state,
                Next::Exit(reason) => {
                    info!(?reason, "Explorer stopped");
                    return Ok(reason);
                }
            }
        }
    }

    /// Run one side effect. Opener failures are reported, not propagated.
    async fn apply(&mut self, effect: Effect) -> AppResult<()> {
        let result = match &effect {
            Effect::Open(path) => self.opener.open(path),
            Effect::Reveal(path) => self.opener.reveal(path),
            Effect::Farewell => {
                self.presenter.show_farewell(FAREWELL_MESSAGE)?;
                tokio::time::sleep(self.config.farewell_pause).await;
                return Ok(());
            }
        };

        if let Err(err) = result {
            error!(?effect, "Opener failed: {err}");
            let hint = format!("{:?}...", self.config.error_pause);
            self.presenter
                .show_error(OPEN_FAILED_MESSAGE, &err.to_string(), &hint)?;
            tokio::time::sleep(self.config.error_pause).await;
        }
        Ok(())
    }
}
