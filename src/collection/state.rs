use crate::entity::Entity;
use crate::mvi::UiState;

/// What one list screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<E> {
    pub items: Vec<E>,
    pub search_text: String,
    pub is_loading: bool,
    /// User-facing message from the last failed fetch.
    pub error: Option<String>,
}

impl<E> Default for CollectionState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_text: String::new(),
            is_loading: false,
            error: None,
        }
    }
}

impl<E: Entity> UiState for CollectionState<E> {}

impl<E: Entity> CollectionState<E> {
    /// Items matching `search`, in list order. Never touches `items`.
    pub fn filtered(&self, search: &str) -> Vec<E> {
        self.items
            .iter()
            .filter(|item| item.matches(search))
            .cloned()
            .collect()
    }

    /// Items matching the current search box.
    pub fn visible(&self) -> Vec<E> {
        self.filtered(&self.search_text)
    }
}
