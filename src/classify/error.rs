//! Error type for code classification.

use std::time::Duration;

use thiserror::Error;

/// A classifier failed to decide what a code is.
///
/// The message is shown to the user verbatim, so classifiers are expected to
/// prefix it with the error label they were given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassificationError {
    message: String,
}

impl ClassificationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The classifier did not answer within `limit`.
    pub fn timed_out(label: &str, limit: Duration) -> Self {
        Self::new(format!(
            "{}: classification timed out after {}ms",
            label,
            limit.as_millis()
        ))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
