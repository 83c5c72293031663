use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Telemetry initialization error: {0}")]
    InitializationError(String),
    #[error("async error channel is closed")]
    AsyncErrorChannelClosed,
    #[error("async error channel is full")]
    AsyncErrorChannelFull,
    #[error("setting global default logger: {0}")]
    GlobalDefault(String),
}
