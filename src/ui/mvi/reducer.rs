use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// `reduce` must stay pure: side effects (network calls, publishing) live
/// with whoever dispatches the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
