//! Per-screen list state for one entity type.

mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::CollectionIntent;
pub use reducer::CollectionReducer;
pub use state::CollectionState;
pub use view_model::{CollectionError, CollectionViewModel, FetchOutcome};
