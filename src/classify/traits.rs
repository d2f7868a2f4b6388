//! Core trait for payment-code classifiers.

use async_trait::async_trait;

use super::error::ClassificationError;
use super::types::Classification;

/// What a classification attempt produced.
pub type ClassifyOutcome = Result<Option<Classification>, ClassificationError>;

/// Decides which payment protocol a raw string belongs to.
///
/// Implementations must be idempotent and free of side effects: the scan
/// session may discard a result (screen torn down, timeout) at any point.
#[async_trait]
pub trait CodeClassifier: Send + Sync {
    /// Returns the name of this classifier for logging.
    fn name(&self) -> &'static str;

    /// Classify `raw`.
    ///
    /// # Arguments
    /// * `raw` - The code as delivered by the input source
    /// * `label` - Error prefix for the input source (e.g. "QR scan error")
    ///
    /// # Returns
    /// * `Ok(Some(variant))` - A recognised payment code
    /// * `Ok(None)` - Not a payment code; scanning should resume
    /// * `Err(ClassificationError)` - The code looked relevant but could not be handled
    async fn classify(&self, raw: &str, label: &str) -> ClassifyOutcome;
}
