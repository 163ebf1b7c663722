//! Application constants.

/// Channel buffer size for commands read from stdin.
pub const COMMAND_CHANNEL_SIZE: usize = 16;

/// Channel buffer size for termination signals. One pending signal is enough.
pub const SIGNAL_CHANNEL_SIZE: usize = 1;

/// Message shown when the current directory can no longer be listed.
pub const LIST_FAILED_MESSAGE: &str = "Fatal error: Cannot read dir contents!";

/// Message shown when the file manager could not be launched.
pub const OPEN_FAILED_MESSAGE: &str = "Cannot open the directory in the file manager";

/// Printed before exiting.
pub const FAREWELL_MESSAGE: &str = "Bye! See ya!";
