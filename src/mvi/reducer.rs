//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Process an intent and return the new state. Must not do I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
