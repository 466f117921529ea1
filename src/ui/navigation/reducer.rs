use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut stack = state.into_stack();
        match intent {
            NavIntent::Navigate(route) => {
                match stack.iter().position(|entry| *entry == route) {
                    Some(index) => stack.truncate(index + 1),
                    None => stack.push(route),
                }
            }
            NavIntent::Back => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
        }
        NavState::from_stack(stack)
    }
}
