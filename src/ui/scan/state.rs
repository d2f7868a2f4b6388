//! State for the scan screen.

use crate::ui::mvi::UiState;

/// Which camera is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Front,
    #[default]
    Back,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Front => Orientation::Back,
            Orientation::Back => Orientation::Front,
        }
    }
}

/// Where the session is in its lifecycle.
///
/// ```text
/// Idle ──accept──→ Processing ──variant──→ Dispatched
///  ↑                   │  │
///  └──────none─────────┘  └──error──→ Stalled ──reenable──→ Idle
///
/// Idle/Stalled ──prompt──→ Prompting ──resolved──→ Dispatched
///                              └──cancelled──→ Idle/Stalled
/// any ──camera denied──→ Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    /// A code is being classified.
    Processing,
    /// The lightning-address prompt is open.
    Prompting,
    /// The last classification failed; intake stays closed until re-enabled.
    Stalled,
    /// Navigation happened. Terminal for this mount.
    Dispatched,
    /// Camera permission was denied. Terminal for this mount.
    Closed,
}

impl ScanPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dispatched | Self::Closed)
    }
}

/// Gate flags and camera settings, owned by one scan session.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanState {
    pub scanning_enabled: bool,
    pub camera_active: bool,
    pub orientation: Orientation,
    pub phase: ScanPhase,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            scanning_enabled: true,
            camera_active: true,
            orientation: Orientation::default(),
            phase: ScanPhase::default(),
        }
    }
}

impl UiState for ScanState {}

impl ScanState {
    /// Both gate flags are open. Backend readiness is checked by the caller.
    pub fn accepts_codes(&self) -> bool {
        self.camera_active && self.scanning_enabled && !self.phase.is_terminal()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
}
