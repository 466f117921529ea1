use crate::ui::mvi::Intent;

use super::route::Route;

#[derive(Debug, Clone)]
pub enum NavIntent {
    /// Go to a route. If it is already on the stack, everything above it
    /// is popped instead of pushing a duplicate.
    Navigate(Route),
    /// Pop the current route unless it is the last one.
    Back,
}

impl Intent for NavIntent {}
