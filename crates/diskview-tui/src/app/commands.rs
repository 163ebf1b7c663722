//! Parsing of interactive command lines.

use strum::EnumString;

/// Fixed command words. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Keyword {
    #[strum(
        serialize = "q",
        serialize = "\\q",
        serialize = "quit",
        serialize = "exit",
        serialize = "bye",
        serialize = "bye!"
    )]
    Quit,
    #[strum(serialize = "open", serialize = "finder")]
    Open,
    #[strum(serialize = "reveal")]
    Reveal,
    #[strum(serialize = ".")]
    Refresh,
    #[strum(serialize = "..")]
    Up,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the explorer.
    Quit,
    /// Open the current directory in the file manager.
    Open,
    /// Reveal the current directory in the file manager.
    Reveal,
    /// List the current directory again.
    Refresh,
    /// Go to the parent directory.
    Up,
    /// Enter the directory shown with this index.
    Select(usize),
    /// Anything else; ignored.
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Self {
        if let Ok(keyword) = line.parse::<Keyword>() {
            return match keyword {
                Keyword::Quit => Self::Quit,
                Keyword::Open => Self::Open,
                Keyword::Reveal => Self::Reveal,
                Keyword::Refresh => Self::Refresh,
                Keyword::Up => Self::Up,
            };
        }

        match line.parse::<usize>() {
            Ok(index) => Self::Select(index),
            Err(_) => Self::Unknown(line.to_string()),
        }
    }
}
