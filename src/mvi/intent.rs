//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (search typed, pull to refresh) or
/// results coming back from the backend (list loaded, entity saved).
pub trait Intent: Send + 'static {}
