use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{SearchState, NO_RESULTS_MESSAGE};

/// Reducer for search state transitions.
///
/// Every completion intent clears `loading`, whichever branch it takes.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Started => SearchState {
                loading: true,
                ..state
            },
            SearchIntent::Succeeded { items } => SearchState {
                items,
                error: None,
                loading: false,
            },
            SearchIntent::NoResults => SearchState {
                items: Vec::new(),
                error: Some(NO_RESULTS_MESSAGE.to_string()),
                loading: false,
            },
            SearchIntent::Failed { message } => SearchState {
                items: Vec::new(),
                error: Some(format!("Error: {}", message)),
                loading: false,
            },
        }
    }
}
