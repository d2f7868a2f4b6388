//! Model-View-Intent (MVI) primitives for the scan screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ camera / overlay
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of the screen, published to the camera adapter
//! - **Intent**: accepted codes, classifier results, button presses
//! - **Reducer**: pure transition function; side effects stay in the session

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
