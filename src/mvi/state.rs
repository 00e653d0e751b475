//! Base trait for screen state.

/// Marker trait for screen state: cloneable snapshots that can be compared
/// to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
