use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::entity::Entity;
use crate::mode::ModeController;
use crate::mvi::Reducer;
use crate::session::{UserId, MISSING_SESSION_MESSAGE};

use super::intent::CollectionIntent;
use super::reducer::CollectionReducer;
use super::state::CollectionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("No logged-in user to scope the list")]
    MissingSession,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CollectionError {
    pub fn user_message(&self) -> String {
        match self {
            CollectionError::MissingSession => MISSING_SESSION_MESSAGE.to_string(),
            CollectionError::Api(err) => err.user_message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with this many items.
    Loaded(usize),
    /// Another fetch for this view model was still running.
    Skipped,
}

/// In-memory list behind one screen.
///
/// Clones share state, so a pull-to-refresh handler and the render loop
/// can hold the same view model. Mutations are applied only after the
/// server confirmed them; each screen owns its own instance.
#[derive(Clone)]
pub struct CollectionViewModel<E: Entity> {
    mode: ModeController,
    client: ApiClient,
    owner: Option<UserId>,
    state: Arc<RwLock<CollectionState<E>>>,
    fetching: Arc<AtomicBool>,
}

impl<E: Entity> CollectionViewModel<E> {
    /// `owner` scopes the live list; `None` means nobody is logged in.
    pub fn new(mode: ModeController, client: ApiClient, owner: Option<UserId>) -> Self {
        Self {
            mode,
            client,
            owner,
            state: Arc::new(RwLock::new(CollectionState::default())),
            fetching: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CollectionState<E> {
        self.state.read().clone()
    }

    pub fn items(&self) -> Vec<E> {
        self.state.read().items.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::SeqCst)
    }

    fn dispatch(&self, intent: CollectionIntent<E>) {
        let mut state = self.state.write();
        let current = std::mem::take(&mut *state);
        *state = CollectionReducer::<E>::reduce(current, intent);
    }

    /// Populate the list: sample data in demo mode, the backend otherwise.
    pub async fn load(&self) -> Result<FetchOutcome, CollectionError> {
        self.fetch().await
    }

    /// Pull-to-refresh. Dropped when a fetch is already running.
    pub async fn refresh(&self) -> Result<FetchOutcome, CollectionError> {
        self.fetch().await
    }

    async fn fetch(&self) -> Result<FetchOutcome, CollectionError> {
        if self.fetching.swap(true, Ordering::SeqCst) {
            tracing::debug!(entity = %E::KIND, "Fetch already running, dropping request");
            return Ok(FetchOutcome::Skipped);
        }
        let fetching = Arc::clone(&self.fetching);
        let _reset = scopeguard::guard((), move |_| fetching.store(false, Ordering::SeqCst));

        if self.mode.is_demo_mode() {
            let items = E::samples();
            let count = items.len();
            self.dispatch(CollectionIntent::Replaced(items));
            tracing::debug!(entity = %E::KIND, count, "Loaded demo data");
            return Ok(FetchOutcome::Loaded(count));
        }

        let Some(owner) = self.owner.as_ref() else {
            tracing::warn!(entity = %E::KIND, "Cannot load list without a session");
            self.dispatch(CollectionIntent::FetchFailed(
                MISSING_SESSION_MESSAGE.to_string(),
            ));
            return Err(CollectionError::MissingSession);
        };

        self.dispatch(CollectionIntent::FetchStarted);
        let abandoned = scopeguard::guard((), |_| {
            tracing::debug!(entity = %E::KIND, "Fetch dropped before completion");
            self.dispatch(CollectionIntent::FetchAbandoned);
        });

        let result = self
            .client
            .fetch_list(E::KIND, owner.as_str())
            .await
            .and_then(decode_items::<E>);
        scopeguard::ScopeGuard::into_inner(abandoned);

        match result {
            Ok(items) => {
                let count = items.len();
                self.dispatch(CollectionIntent::Replaced(items));
                tracing::info!(entity = %E::KIND, count, "List loaded");
                Ok(FetchOutcome::Loaded(count))
            }
            Err(err) => {
                tracing::warn!(entity = %E::KIND, error = %err, "List load failed");
                self.dispatch(CollectionIntent::FetchFailed(err.user_message()));
                Err(err.into())
            }
        }
    }

    /// Append a record the server just created.
    pub fn apply_created(&self, entity: E) {
        self.dispatch(CollectionIntent::Created(entity));
    }

    /// Replace the record with the same id; no-op when it is gone.
    pub fn apply_updated(&self, entity: E) {
        self.dispatch(CollectionIntent::Updated(entity));
    }

    /// Drop the record with `id`; no-op when it is gone.
    pub fn apply_removed(&self, id: &str) {
        self.dispatch(CollectionIntent::Removed(id.to_string()));
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        self.dispatch(CollectionIntent::SearchChanged(text.into()));
    }

    /// Case-insensitive search over the entity's searchable fields.
    pub fn filtered(&self, search: &str) -> Vec<E> {
        self.state.read().filtered(search)
    }

    /// Items matching the stored search text.
    pub fn visible(&self) -> Vec<E> {
        self.state.read().visible()
    }
}

impl<E: Entity> std::fmt::Debug for CollectionViewModel<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionViewModel")
            .field("entity", &E::KIND)
            .field("owner", &self.owner)
            .field("items", &self.state.read().items.len())
            .finish()
    }
}

fn decode_items<E: Entity>(raw: Vec<Value>) -> Result<Vec<E>, ApiError> {
    raw.into_iter()
        .map(|value| {
            serde_json::from_value::<E>(value).map_err(|e| {
                tracing::error!(entity = %E::KIND, error = %e, "List item does not match schema");
                ApiError::MalformedResponse {
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}
