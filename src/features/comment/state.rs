//! State for the comments feature.

use std::collections::{BTreeMap, BTreeSet};

use crate::schema::Comment;
use crate::state::mvi::UiState;
use crate::state::{CommandStatus, RequestToken};

/// A top-level comment with whatever replies have been fetched for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Comment>,
}

impl CommentThread {
    pub fn new(comment: Comment) -> Self {
        Self {
            comment,
            replies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentState {
    /// Article the threads belong to.
    pub news_id: Option<String>,
    /// Threads in arrival order.
    pub threads: Vec<CommentThread>,
    /// Comment id to the usernames that liked it.
    pub likes: BTreeMap<String, BTreeSet<String>>,
    pub loading: bool,
    pub error: Option<String>,
    /// Outcome of the last like or unlike.
    pub result: CommandStatus,
    pub(super) threads_token: RequestToken,
    pub(super) likes_token: RequestToken,
    pub(super) reply_tokens: BTreeMap<String, RequestToken>,
    pub(super) pending: BTreeSet<RequestToken>,
}

impl UiState for CommentState {}

impl CommentState {
    pub fn thread(&self, comment_id: &str) -> Option<&CommentThread> {
        self.threads.iter().find(|t| t.comment.id == comment_id)
    }

    /// Every comment and fetched reply currently on screen.
    pub fn visible_ids(&self) -> Vec<String> {
        self.threads
            .iter()
            .flat_map(|t| std::iter::once(&t.comment).chain(t.replies.iter()))
            .map(|c| c.id.clone())
            .collect()
    }

    /// Look a comment or reply up by id.
    pub fn find(&self, comment_id: &str) -> Option<&Comment> {
        self.threads
            .iter()
            .flat_map(|t| std::iter::once(&t.comment).chain(t.replies.iter()))
            .find(|c| c.id == comment_id)
    }

    pub fn is_liked_by(&self, comment_id: &str, username: &str) -> bool {
        self.likes
            .get(comment_id)
            .is_some_and(|users| users.contains(username))
    }

    /// Likes from the batch map, or the count on the record when the map
    /// has not been loaded for this comment.
    pub fn like_count(&self, comment_id: &str) -> u64 {
        match self.likes.get(comment_id) {
            Some(users) => users.len() as u64,
            None => self.find(comment_id).map_or(0, |c| c.like_count),
        }
    }
}
