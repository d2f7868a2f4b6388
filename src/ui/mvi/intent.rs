//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (paste, flip camera, address shortcut) or
/// system events (classifier result, prompt result, camera permission).
pub trait Intent: Send + 'static {}
