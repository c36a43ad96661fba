//! State for the user feature.

use crate::schema::User;
use crate::state::mvi::UiState;
use crate::state::{CommandStatus, Resource};

/// Which single-value slot of the user store a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSlot {
    Profile,
    Users,
    Selected,
    NewsLike,
}

/// Whether the current user liked one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsLike {
    pub news_id: String,
    pub liked: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    /// The logged-in user's own record.
    pub profile: Resource<User>,
    /// Every account (admin listing).
    pub users: Resource<Vec<User>>,
    /// A single account fetched by id.
    pub selected: Resource<User>,
    pub news_like: Resource<NewsLike>,
    /// Outcome of the last update, delete, clean or like command.
    pub result: CommandStatus,
}

impl UiState for UserState {}

impl UserState {
    /// Whether `news_id` is known to be liked by the current user.
    pub fn likes_news(&self, news_id: &str) -> bool {
        self.news_like
            .data
            .as_ref()
            .is_some_and(|like| like.news_id == news_id && like.liked)
    }
}
