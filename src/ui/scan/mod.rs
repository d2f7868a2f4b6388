//! Scan intake feature module.
//!
//! Gating state machine for the send camera screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Gate flags, camera orientation and phase
//! - `intent.rs` - Accept, Resume, Dispatch, Fail, prompt and camera events
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ScanIntent;
pub use reducer::ScanReducer;
pub use state::{Orientation, ScanPhase, ScanState};
