use tokio::sync::mpsc::{self, error::TrySendError};

use crate::TelemetryError;

pub const DEFAULT_ASYNC_ERROR_CAPACITY: usize = 64;

/// Creates the channel that telemetry backends use to report errors which
/// happen after a provider was created, e.g. an exporter losing its connection.
pub fn async_error_channel(capacity: usize) -> (AsyncErrorReporter, AsyncErrorReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (AsyncErrorReporter { tx }, AsyncErrorReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct AsyncErrorReporter {
    tx: mpsc::Sender<anyhow::Error>,
}

impl AsyncErrorReporter {
    /// Hands `err` to the receiver without blocking.
    pub fn report(&self, err: impl Into<anyhow::Error>) -> Result<(), TelemetryError> {
        self.tx.try_send(err.into()).map_err(|e| match e {
            TrySendError::Full(_) => TelemetryError::AsyncErrorChannelFull,
            TrySendError::Closed(_) => TelemetryError::AsyncErrorChannelClosed,
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[derive(Debug)]
pub struct AsyncErrorReceiver {
    rx: mpsc::Receiver<anyhow::Error>,
}

impl AsyncErrorReceiver {
    /// Waits for the next reported error. Returns `None` once every reporter
    /// has been dropped and the buffer is drained.
    pub async fn recv(&mut self) -> Option<anyhow::Error> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<anyhow::Error> {
        self.rx.try_recv().ok()
    }
}
