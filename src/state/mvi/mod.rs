//! Model-View-Intent (MVI) primitives for the feature stores.
//!
//! Every feature store keeps one snapshot and changes it only by running
//! an intent through its reducer.
//!
//! ```text
//! Command ──→ Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                             │
//!    └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one feature
//! - **Intent**: A command starting, or a response arriving
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
