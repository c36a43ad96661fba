//! Startup session detection and the navigation guards built on the
//! session snapshot.

mod detect;
mod guard;
mod route;

pub use detect::detect_session;
pub use guard::{guard, GuardDecision};
pub use route::Route;
