//! Own profile, the admin user listing and news likes.

mod intent;
mod reducer;
mod service;
mod state;

pub use intent::UserIntent;
pub use reducer::UserReducer;
pub use service::UserService;
pub use state::{NewsLike, UserSlot, UserState};
