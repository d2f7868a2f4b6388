//! Base trait for screen state.

/// Marker trait for state snapshots.
///
/// `Clone` so a snapshot can be published to observers, `PartialEq` so they
/// can skip unchanged updates.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
