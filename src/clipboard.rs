//! Clipboard access for the paste button.

use arboard::Clipboard;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard read task failed: {0}")]
    Task(String),
}

/// On-demand single read of the clipboard text.
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    async fn read_text(&self) -> Result<String, ClipboardError>;
}

/// System clipboard backed by `arboard`.
///
/// A fresh handle is opened for every read on a blocking thread; some
/// platforms do not allow a clipboard handle to move between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardSource for SystemClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        tokio::task::spawn_blocking(|| {
            let mut clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            match clipboard.get_text() {
                Ok(text) => Ok(text),
                // An empty or non-text clipboard pastes as an empty string.
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(ClipboardError::Unavailable(e.to_string())),
            }
        })
        .await
        .map_err(|e| ClipboardError::Task(e.to_string()))?
    }
}
