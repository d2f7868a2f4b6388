use async_trait::async_trait;

/// Result of the interactive lightning-address prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The address was resolved and the pay request is ready downstream.
    Resolved,
    /// The user dismissed the prompt.
    Cancelled,
}

/// Interactive lightning-address lookup.
///
/// The resolved pay request itself is handed to the LNURL screens by the
/// implementation; the scan session only needs to know whether to navigate.
#[async_trait]
pub trait AddressPrompt: Send + Sync {
    async fn prompt(&self) -> PromptOutcome;
}
