//! Comment threads of one article, their lazily loaded replies and the
//! batch-fetched like map.

mod intent;
mod reducer;
mod service;
mod state;

pub use intent::CommentIntent;
pub use reducer::CommentReducer;
pub use service::CommentService;
pub use state::{CommentState, CommentThread};
