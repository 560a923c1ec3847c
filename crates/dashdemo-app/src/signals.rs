//! OS signals become `Message::Quit`

use dashdemo_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Signal that asked the process to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl ShutdownSignal {
    pub fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Listen for a shutdown signal and forward it to the message loop as a quit.
///
/// The task ends on its own once every receiver is gone; the returned handle
/// lets the owner abort it earlier.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let received = tokio::select! {
            received = next_shutdown_signal() => received,
            _ = tx.closed() => {
                debug!("Message loop gone, signal listener exiting");
                return;
            }
        };

        match received {
            Ok(signal) => {
                info!("{} received, quitting", signal.name());
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Quit after {} not delivered", signal.name());
                }
            }
            Err(e) => error!("Cannot listen for shutdown signals: {}", e),
        }
    })
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, signal_name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("{} handler: {}", signal_name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
