//! Intents for the user store.

use crate::schema::User;
use crate::state::mvi::Intent;
use crate::state::RequestToken;

use super::state::{NewsLike, UserSlot};

#[derive(Debug, Clone)]
pub enum UserIntent {
    Started {
        slot: UserSlot,
        token: RequestToken,
    },
    Failed {
        slot: UserSlot,
        token: RequestToken,
        message: String,
    },

    ProfileLoaded { token: RequestToken, user: User },
    UsersLoaded { token: RequestToken, users: Vec<User> },
    SelectedLoaded { token: RequestToken, user: User },
    NewsLikeLoaded { token: RequestToken, like: NewsLike },

    /// The session ended; the profile no longer belongs to anyone.
    ProfileCleared,

    CommandStarted,
    CommandSucceeded,
    CommandFailed { message: String },
}

impl Intent for UserIntent {}
