use std::marker::PhantomData;

use crate::entity::Entity;
use crate::mvi::Reducer;

use super::intent::CollectionIntent;
use super::state::CollectionState;

pub struct CollectionReducer<E>(PhantomData<E>);

impl<E: Entity> Reducer for CollectionReducer<E> {
    type State = CollectionState<E>;
    type Intent = CollectionIntent<E>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CollectionIntent::FetchStarted => {
                state.is_loading = true;
            }
            CollectionIntent::Replaced(items) => {
                state.items = items;
                state.is_loading = false;
                state.error = None;
            }
            CollectionIntent::FetchFailed(message) => {
                state.is_loading = false;
                state.error = Some(message);
            }
            CollectionIntent::Created(entity) => {
                // Ids are server-assigned, so no dedup.
                state.items.push(entity);
            }
            CollectionIntent::Updated(entity) => {
                // Missing id: a refresh may have dropped it meanwhile.
                if let Some(slot) = state.items.iter_mut().find(|item| item.id() == entity.id()) {
                    *slot = entity;
                }
            }
            CollectionIntent::Removed(id) => {
                state.items.retain(|item| item.id() != id);
            }
            CollectionIntent::SearchChanged(text) => {
                state.search_text = text;
            }
            CollectionIntent::FetchAbandoned => {
                state.is_loading = false;
            }
        }
        state
    }
}
