//! Pure view models derived from store snapshots.

pub mod admin;
pub mod comments;
pub mod pagination;
pub mod profile;

pub use admin::UserListView;
pub use comments::{can_modify, like_action, should_fetch_replies, LikeAction};
pub use pagination::{total_pages, visible_pages, PageLink, Pager};
pub use profile::ProfileForm;
