//! Terminal presentation of listings and messages.

mod format;

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use diskview_core::Listing;

pub use format::{RowLayout, fit_name, format_bytes, format_row, format_size};

const TITLE: &str = "============================== Disk Usage Explorer =================================";
const HELP: &str = "Enter folder # to explore, \"..\" to go back, \".\" to refresh, Ctrl+C to quit ";
const RULE: &str = "------------------------------------------------------------------------------------";

/// Where listings and status messages go.
pub trait Presenter {
    /// Show a sorted listing and prompt for the next command.
    fn show_listing(&mut self, listing: &Listing, hide_empty: bool) -> io::Result<()>;

    /// Report a recoverable error.
    fn show_error(&mut self, message: &str, detail: &str, hint: &str) -> io::Result<()>;

    /// Say goodbye.
    fn show_farewell(&mut self, message: &str) -> io::Result<()>;
}

/// Line-oriented presenter that redraws the whole screen per listing.
pub struct TerminalPresenter<W: Write> {
    out: W,
    layout: RowLayout,
    clear_screen: bool,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter writing to stdout and clearing the screen between listings.
    pub fn stdout(layout: RowLayout) -> Self {
        Self::new(io::stdout(), layout, true)
    }
}

impl<W: Write> TerminalPresenter<W> {
    /// Create a presenter over any writer.
    pub fn new(out: W, layout: RowLayout, clear_screen: bool) -> Self {
        Self {
            out,
            layout,
            clear_screen,
        }
    }

    /// Consume the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear(&mut self) {
        if let Err(err) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!("Cannot clear screen: {err}");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_listing(&mut self, listing: &Listing, hide_empty: bool) -> io::Result<()> {
        if self.clear_screen {
            self.clear();
        }

        writeln!(self.out)?;
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out, "{HELP}")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "{}", listing.path().display())?;
        writeln!(self.out, "{RULE}")?;

        for row in listing.display_rows(hide_empty) {
            writeln!(self.out, "{}", format_row(&row, self.layout))?;
        }

        if !listing.warnings.is_empty() {
            writeln!(self.out, "{RULE}")?;
            writeln!(self.out, "{} warning(s) while sizing:", listing.warnings.len())?;
            for warning in &listing.warnings {
                writeln!(self.out, "  {}: {}", warning.path.display(), warning.message)?;
            }
        }

        writeln!(self.out, "{RULE}")?;
        write!(self.out, "> ")?;
        self.out.flush()
    }

    fn show_error(&mut self, message: &str, detail: &str, hint: &str) -> io::Result<()> {
        writeln!(self.out, "{message} {detail}")?;
        writeln!(self.out, "{hint}")?;
        self.out.flush()
    }

    fn show_farewell(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}
