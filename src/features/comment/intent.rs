//! Intents for the comments store.

use crate::api::LikeMap;
use crate::schema::Comment;
use crate::state::mvi::Intent;
use crate::state::RequestToken;

#[derive(Debug, Clone)]
pub enum CommentIntent {
    /// Thread list of `news_id` requested. Switching article drops the
    /// previous article's threads and likes.
    ThreadsStarted {
        news_id: String,
        token: RequestToken,
    },
    ThreadsLoaded {
        token: RequestToken,
        comments: Vec<Comment>,
    },
    ThreadsFailed {
        token: RequestToken,
        message: String,
    },

    RepliesStarted {
        parent_id: String,
        token: RequestToken,
    },
    RepliesLoaded {
        parent_id: String,
        token: RequestToken,
        replies: Vec<Comment>,
    },
    RepliesFailed {
        parent_id: String,
        token: RequestToken,
        message: String,
    },

    LikesStarted { token: RequestToken },
    LikesLoaded { token: RequestToken, likes: LikeMap },
    LikesFailed { token: RequestToken, message: String },

    /// Add, edit or delete sent. Success is followed by a thread reload.
    EditStarted { token: RequestToken },
    EditSucceeded { token: RequestToken },
    EditFailed { token: RequestToken, message: String },

    CommandStarted,
    CommandSucceeded,
    CommandFailed { message: String },
}

impl Intent for CommentIntent {}
