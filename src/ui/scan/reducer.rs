//! Reducer for the scan screen.

use crate::ui::mvi::Reducer;

use super::intent::ScanIntent;
use super::state::{ScanPhase, ScanState};

/// Pure transitions of the scan gate.
///
/// Gate checks that involve outside state (backend readiness) and all side
/// effects (classifier, router, notifications) are done by the session around
/// the dispatch call. Intents that do not apply to the current phase leave the
/// state unchanged.
pub struct ScanReducer;

impl Reducer for ScanReducer {
    type State = ScanState;
    type Intent = ScanIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScanIntent::Accept => match state.phase {
                ScanPhase::Idle if state.accepts_codes() => ScanState {
                    camera_active: false,
                    scanning_enabled: false,
                    phase: ScanPhase::Processing,
                    ..state
                },
                _ => state,
            },

            ScanIntent::Resume => match state.phase {
                ScanPhase::Processing => ScanState {
                    camera_active: true,
                    scanning_enabled: true,
                    phase: ScanPhase::Idle,
                    ..state
                },
                _ => state,
            },

            ScanIntent::Dispatch => match state.phase {
                ScanPhase::Processing | ScanPhase::Prompting => ScanState {
                    phase: ScanPhase::Dispatched,
                    ..state
                },
                _ => state,
            },

            ScanIntent::Fail => match state.phase {
                ScanPhase::Processing => ScanState {
                    phase: ScanPhase::Stalled,
                    ..state
                },
                _ => state,
            },

            ScanIntent::BeginPrompt => match state.phase {
                ScanPhase::Idle | ScanPhase::Stalled => ScanState {
                    scanning_enabled: false,
                    phase: ScanPhase::Prompting,
                    ..state
                },
                _ => state,
            },

            ScanIntent::CancelPrompt => match state.phase {
                ScanPhase::Prompting => {
                    // The camera may still be off from an earlier failure, in
                    // which case intake stays stalled.
                    let phase = if state.camera_active {
                        ScanPhase::Idle
                    } else {
                        ScanPhase::Stalled
                    };
                    ScanState {
                        scanning_enabled: true,
                        phase,
                        ..state
                    }
                }
                _ => state,
            },

            ScanIntent::Reenable => match state.phase {
                ScanPhase::Stalled => ScanState {
                    camera_active: true,
                    scanning_enabled: true,
                    phase: ScanPhase::Idle,
                    ..state
                },
                _ => state,
            },

            ScanIntent::Deny => {
                if state.is_terminal() {
                    state
                } else {
                    ScanState {
                        camera_active: false,
                        scanning_enabled: false,
                        phase: ScanPhase::Closed,
                        ..state
                    }
                }
            }

            ScanIntent::ToggleOrientation => ScanState {
                orientation: state.orientation.flipped(),
                ..state
            },
        }
    }
}
