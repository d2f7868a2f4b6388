//! Intents for the scan screen.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanIntent {
    /// A code passed the gate. Closes both flags before classification starts.
    Accept,

    /// The classifier found nothing. Reopens both flags.
    Resume,

    /// Navigation was dispatched, from a classified code or the address prompt.
    Dispatch,

    /// The classifier failed. Flags stay closed.
    Fail,

    /// Lightning-address prompt opened. Stops scanning; camera untouched.
    BeginPrompt,

    /// Lightning-address prompt dismissed. Scanning resumes.
    CancelPrompt,

    /// External action re-opening intake after a failure.
    Reenable,

    /// Camera permission denied.
    Deny,

    /// Flip front/back camera. Allowed in every phase.
    ToggleOrientation,
}

impl Intent for ScanIntent {}
