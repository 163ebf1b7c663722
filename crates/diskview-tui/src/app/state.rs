//! Navigation state and the values exchanged with the control loop.

use std::path::{Path, PathBuf};

/// Where the explorer currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    root: PathBuf,
    current: PathBuf,
}

impl NavState {
    /// Start browsing `current`, with `root` as the fallback and upper bound.
    pub fn new(root: impl Into<PathBuf>, current: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            current: current.into(),
        }
    }

    /// Fixed root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory being browsed.
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Check if the current directory is the root.
    pub fn at_root(&self) -> bool {
        self.current == self.root
    }

    /// Same root, different current directory.
    pub fn moved_to(self, current: PathBuf) -> Self {
        Self {
            root: self.root,
            current,
        }
    }
}

/// One event consumed by the control loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A line typed by the user.
    Command(String),
    /// Interrupt or terminate signal.
    Terminate,
    /// The command source reached end of input.
    InputClosed,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open a path in the file manager.
    Open(PathBuf),
    /// Reveal a path in the file manager.
    Reveal(PathBuf),
    /// Say goodbye before exiting.
    Farewell,
}

/// State after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    /// Keep browsing, listing this state's current directory.
    Browse(NavState),
    /// Leave the loop.
    Exit(ExitReason),
}

/// Why the explorer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A quit command was entered.
    Quit,
    /// A termination signal arrived.
    Signal,
    /// Input ended.
    InputClosed,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Next,
    pub effects: Vec<Effect>,
}

impl Transition {
    /// Keep browsing without side effects.
    pub fn browse(state: NavState) -> Self {
        Self {
            next: Next::Browse(state),
            effects: Vec::new(),
        }
    }

    /// Keep browsing after running one effect.
    pub fn browse_with(state: NavState, effect: Effect) -> Self {
        Self {
            next: Next::Browse(state),
            effects: vec![effect],
        }
    }

    /// Say goodbye and stop.
    pub fn exit(reason: ExitReason) -> Self {
        Self {
            next: Next::Exit(reason),
            effects: vec![Effect::Farewell],
        }
    }
}
