//! Background event sources: command lines and termination signals.
//!
//! Both sources run as tasks that stop when their cancellation token fires.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::app::constants::{COMMAND_CHANNEL_SIZE, SIGNAL_CHANNEL_SIZE};

/// Forward every line of `reader` into a channel.
///
/// The channel closes when the reader hits end of input, fails, or the
/// token is cancelled.
pub fn spawn_line_reader<R>(reader: R, cancel: CancellationToken) -> (mpsc::Receiver<String>, JoinHandle<()>)
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);

    let handle = tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                line = lines.next_line() => match line {
                    Ok(Some(mut line)) => {
                        if line.ends_with('\r') {
                            line.pop();
                        }
                        if tx.send(line).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => {
                        debug!("Command input closed");
                        break;
                    }
                    Err(err) => {
                        warn!("Cannot read command input: {err}");
                        break;
                    }
                },
            }
        }
    });

    (rx, handle)
}

/// Forward lines typed on stdin.
pub fn spawn_stdin_reader(cancel: CancellationToken) -> (mpsc::Receiver<String>, JoinHandle<()>) {
    spawn_line_reader(BufReader::new(tokio::io::stdin()), cancel)
}

/// Relay SIGINT and SIGTERM into a channel.
///
/// A signal arriving while one is already pending is dropped.
#[cfg(unix)]
pub fn spawn_signal_relay(cancel: CancellationToken) -> std::io::Result<(mpsc::Receiver<()>, JoinHandle<()>)> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let (tx, rx) = mpsc::channel(SIGNAL_CHANNEL_SIZE);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                Some(()) = interrupt.recv() => {
                    debug!("SIGINT received");
                    let _ = tx.try_send(());
                }
                Some(()) = terminate.recv() => {
                    debug!("SIGTERM received");
                    let _ = tx.try_send(());
                }
            }
        }
    });

    Ok((rx, handle))
}

/// Relay Ctrl-C into a channel.
#[cfg(not(unix))]
pub fn spawn_signal_relay(cancel: CancellationToken) -> std::io::Result<(mpsc::Receiver<()>, JoinHandle<()>)> {
    let (tx, rx) = mpsc::channel(SIGNAL_CHANNEL_SIZE);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        warn!("Cannot listen for Ctrl-C: {err}");
                        break;
                    }
                    let _ = tx.try_send(());
                }
            }
        }
    });

    Ok((rx, handle))
}
