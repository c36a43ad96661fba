//! HTTP transport to the portal API, grouped by endpoint family, plus the
//! refresh-and-retry policy for authenticated calls.

mod auth;
mod client;
mod comment;
mod error;
mod location;
mod news;
pub mod retry;
mod user;

pub use auth::AuthApi;
pub use client::{ApiClient, ApiPath, Query};
pub use comment::{CommentApi, LikeMap};
pub use error::ApiError;
pub use location::LocationApi;
pub use news::NewsApi;
pub use retry::{with_auth_retry, RetryState, SessionRefresher};
pub use user::UserApi;
