//! News listings, featured articles, single articles and search results,
//! plus the admin commands that change them.

mod intent;
mod reducer;
mod service;
mod state;

pub use intent::NewsIntent;
pub use reducer::NewsReducer;
pub use service::NewsService;
pub use state::{NewsList, NewsState};
