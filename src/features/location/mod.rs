//! Approximate client location, resolved by the API from the caller's
//! address.

mod intent;
mod reducer;
mod service;
mod state;

pub use intent::LocationIntent;
pub use reducer::LocationReducer;
pub use service::LocationService;
pub use state::LocationState;
