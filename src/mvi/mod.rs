//! Model-View-Intent primitives for screen state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Screen
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: everything a screen needs to render
//! - **Intent**: a user action or a completed network call
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
