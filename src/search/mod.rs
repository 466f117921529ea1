//! Search view-state feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - what the search screen renders (items, error, loading)
//! - `intent.rs` - request lifecycle events (Started, Succeeded, NoResults, Failed)
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `controller.rs` - owns the client and the published state, runs requests

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{PendingSearch, SearchController};
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchState, NO_RESULTS_MESSAGE};
