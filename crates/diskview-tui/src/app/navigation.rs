//! Pure navigation transitions.
//!
//! The control loop feeds every event through [`transition`] together with
//! the listing that was last shown, then runs the returned effects.

use diskview_core::Listing;

use super::commands::Command;
use super::state::{Effect, Event, ExitReason, NavState, Transition};

/// Apply one event to the navigation state.
///
/// Indices resolve against `listing`, numbered the way the presenter
/// numbers them for the given `hide_empty` setting.
pub fn transition(state: NavState, event: Event, listing: &Listing, hide_empty: bool) -> Transition {
    let line = match event {
        Event::Terminate => return Transition::exit(ExitReason::Signal),
        Event::InputClosed => return Transition::exit(ExitReason::InputClosed),
        Event::Command(line) => line,
    };

    match Command::parse(&line) {
        Command::Quit => Transition::exit(ExitReason::Quit),
        Command::Open => {
            let path = state.current().to_path_buf();
            Transition::browse_with(state, Effect::Open(path))
        }
        Command::Reveal => {
            let path = state.current().to_path_buf();
            Transition::browse_with(state, Effect::Reveal(path))
        }
        Command::Refresh => Transition::browse(state),
        Command::Up => Transition::browse(parent_of(state)),
        Command::Select(index) => match listing.resolve_index(index, hide_empty) {
            Some(entry) => {
                let target = entry.full_path.clone();
                Transition::browse(state.moved_to(target))
            }
            None => Transition::browse(state),
        },
        Command::Unknown(_) => Transition::browse(state),
    }
}

/// State to continue from when the current directory cannot be listed.
pub fn fallback(state: NavState) -> NavState {
    let root = state.root().to_path_buf();
    state.moved_to(root)
}

fn parent_of(state: NavState) -> NavState {
    if state.at_root() {
        return state;
    }
    match state.current().parent() {
        Some(parent) => {
            let parent = parent.to_path_buf();
            state.moved_to(parent)
        }
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::state::Next;
    use diskview_core::{EntrySize, FsEntry};
    use std::path::{Path, PathBuf};

    fn listing_at(path: &str) -> Listing {
        let parent = Path::new(path);
        let mut big = FsEntry::directory(parent, "big");
        big.resolve(900);
        let mut small = FsEntry::directory(parent, "small");
        small.resolve(10);
        let mut empty = FsEntry::directory(parent, "empty");
        empty.resolve(0);
        let file = FsEntry::file(parent, "notes.txt", EntrySize::Known(500));
        Listing::new(path, vec![small, file, empty, big], Vec::new())
    }

    fn command(state: NavState, line: &str) -> Transition {
        let listing = listing_at(&state.current().to_string_lossy());
        transition(state, Event::Command(line.to_string()), &listing, true)
    }

    fn browsed(transition: Transition) -> PathBuf {
        match transition.next {
            Next::Browse(state) => state.current().to_path_buf(),
            Next::Exit(reason) => panic!("unexpected exit: {reason:?}"),
        }
    }

    #[test]
    fn test_select_directory_by_index() {
        let state = NavState::new("/", "/data");
        assert_eq!(browsed(command(state.clone(), "1")), PathBuf::from("/data/big"));
        assert_eq!(browsed(command(state, "2")), PathBuf::from("/data/small"));
    }

    #[test]
    fn test_unknown_index_is_noop() {
        let state = NavState::new("/", "/data");
        // "empty" is hidden, so there is no index 3
        let result = command(state, "3");
        assert!(result.effects.is_empty());
        assert_eq!(browsed(result), PathBuf::from("/data"));
    }

    #[test]
    fn test_up_moves_to_parent() {
        let state = NavState::new("/", "/data/logs");
        assert_eq!(browsed(command(state, "..")), PathBuf::from("/data"));
    }

    #[test]
    fn test_up_at_root_is_noop() {
        let state = NavState::new("/", "/");
        assert_eq!(browsed(command(state, "..")), PathBuf::from("/"));

        let state = NavState::new("/srv", "/srv");
        assert_eq!(browsed(command(state, "..")), PathBuf::from("/srv"));
    }

    #[test]
    fn test_refresh_and_garbage_stay() {
        let state = NavState::new("/", "/data");
        assert_eq!(browsed(command(state.clone(), ".")), PathBuf::from("/data"));
        assert_eq!(browsed(command(state.clone(), "hello")), PathBuf::from("/data"));
        assert_eq!(browsed(command(state, "QUIT")), PathBuf::from("/data"));
    }

    #[test]
    fn test_open_and_reveal_effects() {
        let state = NavState::new("/", "/data");
        let open = command(state.clone(), "finder");
        assert_eq!(open.effects, vec![Effect::Open(PathBuf::from("/data"))]);
        assert_eq!(browsed(open), PathBuf::from("/data"));

        let reveal = command(state, "reveal");
        assert_eq!(reveal.effects, vec![Effect::Reveal(PathBuf::from("/data"))]);
    }

    #[test]
    fn test_quit_and_signal_exit() {
        let state = NavState::new("/", "/data");
        let quit = command(state.clone(), "bye!");
        assert_eq!(quit.next, Next::Exit(ExitReason::Quit));
        assert_eq!(quit.effects, vec![Effect::Farewell]);

        let listing = listing_at("/data");
        let signal = transition(state.clone(), Event::Terminate, &listing, true);
        assert_eq!(signal.next, Next::Exit(ExitReason::Signal));

        let closed = transition(state, Event::InputClosed, &listing, true);
        assert_eq!(closed.next, Next::Exit(ExitReason::InputClosed));
    }

    #[test]
    fn test_fallback_goes_to_root() {
        let state = fallback(NavState::new("/", "/deleted/dir"));
        assert_eq!(state.current(), Path::new("/"));
        assert!(state.at_root());
    }

    #[cfg(unix)]
    #[test]
    fn test_select_enters_raw_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"bad\xff");
        let mut dir = FsEntry::directory(Path::new("/data"), raw);
        dir.resolve(100);
        let listing = Listing::new("/data", vec![dir], Vec::new());

        let state = NavState::new("/", "/data");
        let result = transition(state, Event::Command("1".to_string()), &listing, true);
        assert_eq!(browsed(result), Path::new("/data").join(raw));
    }
}
