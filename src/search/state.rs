use crate::api::Cocktail;
use crate::ui::mvi::UiState;

/// Shown when the catalog has nothing for the query.
pub const NO_RESULTS_MESSAGE: &str = "No cocktails found.";

/// Observable state of the search screen.
///
/// At most one of `items` / `error` carries meaning after a request
/// completes. `loading` brackets the most recent request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub items: Vec<Cocktail>,
    pub error: Option<String>,
    pub loading: bool,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn has_results(&self) -> bool {
        !self.items.is_empty()
    }
}
