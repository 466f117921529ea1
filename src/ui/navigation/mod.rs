//! Screen flow.
//!
//! Three routes (`info`, `search`, `recipe/{name}/{instructions}`) on a
//! back stack. Same MVI split as the other features:
//! - `route.rs` - route values and their path form
//! - `state.rs` - the back stack
//! - `intent.rs` - Navigate / Back
//! - `reducer.rs` - stack transitions (pure, no side effects)

mod intent;
mod reducer;
mod route;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use route::{Route, RouteError};
pub use state::NavState;
