use crate::ui::mvi::UiState;

use super::route::Route;

/// Back stack of visited routes. Never empty; the bottom entry is `info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    stack: Vec<Route>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            stack: vec![Route::Info],
        }
    }
}

impl UiState for NavState {}

impl NavState {
    pub(super) fn from_stack(stack: Vec<Route>) -> Self {
        if stack.is_empty() {
            return Self::default();
        }
        Self { stack }
    }

    pub(super) fn into_stack(self) -> Vec<Route> {
        self.stack
    }

    pub fn current(&self) -> &Route {
        // Invariant: the stack is never empty.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }
}
