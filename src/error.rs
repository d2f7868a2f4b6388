//! Top-level error for the `sendcam` binary.

use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::config::ConfigError;
use crate::intake::IntakeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("Session task failed: {0}")]
    Session(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
