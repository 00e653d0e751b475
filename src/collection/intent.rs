use crate::mvi::Intent;
use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionIntent<E> {
    FetchStarted,
    /// A fetch succeeded; the list is replaced wholesale.
    Replaced(Vec<E>),
    /// A fetch failed; items stay as they were.
    FetchFailed(String),
    /// The server confirmed a create.
    Created(E),
    /// The server confirmed an update.
    Updated(E),
    /// The server confirmed a delete.
    Removed(String),
    SearchChanged(String),
    /// A fetch was dropped before it finished; nothing else changes.
    FetchAbandoned,
}

impl<E: Entity> Intent for CollectionIntent<E> {}
