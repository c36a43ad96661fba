//! Authenticated-session feature.
//!
//! Holds the tri-state session status and the current session, and owns
//! every `/auth/*` command. The service also acts as the
//! [`SessionRefresher`](crate::api::SessionRefresher) for all other
//! features.
//!
//! # Architecture
//!
//! - `state.rs` - Session status and snapshot
//! - `intent.rs` - Commands starting and responses arriving
//! - `reducer.rs` - State transitions
//! - `service.rs` - Transport calls feeding the store

mod intent;
mod reducer;
mod service;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use service::AuthService;
pub use state::{AuthState, SessionStatus};
