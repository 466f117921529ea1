//! Model-View-Intent (MVI) primitives shared by the screen features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: what a screen renders, replaced wholesale on each transition
//! - **Intent**: key presses, request lifecycle events, navigation
//! - **Reducer**: pure function from (State, Intent) to State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
