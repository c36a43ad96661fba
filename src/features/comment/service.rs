use std::sync::Arc;

use crate::api::{with_auth_retry, ApiError, CommentApi, LikeMap, SessionRefresher};
use crate::schema::validate::validate_comment;
use crate::schema::NewComment;
use crate::state::{RequestToken, Store};

use super::intent::CommentIntent;
use super::reducer::CommentReducer;
use super::state::CommentState;

/// Comment threads, replies and likes for the article being read.
pub struct CommentService {
    api: CommentApi,
    store: Store<CommentReducer>,
    refresher: Arc<dyn SessionRefresher>,
}

impl CommentService {
    pub fn new(api: CommentApi, refresher: Arc<dyn SessionRefresher>) -> Self {
        Self {
            api,
            store: Store::new(),
            refresher,
        }
    }

    pub fn store(&self) -> &Store<CommentReducer> {
        &self.store
    }

    pub fn snapshot(&self) -> CommentState {
        self.store.snapshot()
    }

    /// Load the threads of `news_id`, then the likes of every comment shown.
    pub async fn load(&self, news_id: &str) {
        let token = self.store.next_token();
        self.store.dispatch(CommentIntent::ThreadsStarted {
            news_id: news_id.to_string(),
            token,
        });

        match self.api.list(news_id).await {
            Ok(comments) => {
                tracing::debug!(news_id, count = comments.len(), "Comments loaded");
                self.store
                    .dispatch(CommentIntent::ThreadsLoaded { token, comments });
                self.load_likes().await;
            }
            Err(err) => self.store.dispatch(CommentIntent::ThreadsFailed {
                token,
                message: err.display_message("Error loading comments"),
            }),
        }
    }

    /// Fetch the replies of `parent_id` and refresh the like map.
    pub async fn load_replies(&self, parent_id: &str) {
        let token = self.store.next_token();
        self.store.dispatch(CommentIntent::RepliesStarted {
            parent_id: parent_id.to_string(),
            token,
        });

        match self.api.replies(parent_id).await {
            Ok(replies) => {
                self.store.dispatch(CommentIntent::RepliesLoaded {
                    parent_id: parent_id.to_string(),
                    token,
                    replies,
                });
                self.load_likes().await;
            }
            Err(err) => self.store.dispatch(CommentIntent::RepliesFailed {
                parent_id: parent_id.to_string(),
                token,
                message: err.display_message("Error loading replies"),
            }),
        }
    }

    /// Batch-load who liked each visible comment and reply.
    pub async fn load_likes(&self) {
        let ids = self.store.read(CommentState::visible_ids);
        let token = self.store.next_token();
        self.store.dispatch(CommentIntent::LikesStarted { token });

        if ids.is_empty() {
            self.store.dispatch(CommentIntent::LikesLoaded {
                token,
                likes: LikeMap::new(),
            });
            return;
        }

        match self.api.likes(&ids).await {
            Ok(likes) => self.store.dispatch(CommentIntent::LikesLoaded { token, likes }),
            Err(err) => self.store.dispatch(CommentIntent::LikesFailed {
                token,
                message: err.display_message("Error loading likes"),
            }),
        }
    }

    /// Post a comment, or a reply when `parent_id` is given.
    pub async fn add(&self, news_id: &str, content: &str, parent_id: Option<&str>) -> bool {
        let token = self.store.next_token();
        self.store.dispatch(CommentIntent::EditStarted { token });

        let content = match validate_comment(content) {
            Ok(content) => content,
            Err(err) => {
                self.store.dispatch(CommentIntent::EditFailed {
                    token,
                    message: err.to_string(),
                });
                return false;
            }
        };
        let body = NewComment {
            comment: content,
            parent_comment_id: parent_id,
        };

        let result = with_auth_retry(self.refresher.as_ref(), || self.api.add(news_id, &body)).await;
        self.finish_edit(news_id, token, result, "Error saving comment").await
    }

    pub async fn update(&self, news_id: &str, comment_id: &str, content: &str) -> bool {
        let token = self.store.next_token();
        self.store.dispatch(CommentIntent::EditStarted { token });

        let content = match validate_comment(content) {
            Ok(content) => content,
            Err(err) => {
                self.store.dispatch(CommentIntent::EditFailed {
                    token,
                    message: err.to_string(),
                });
                return false;
            }
        };

        let result =
            with_auth_retry(self.refresher.as_ref(), || self.api.update(comment_id, content)).await;
        self.finish_edit(news_id, token, result, "Error updating comment").await
    }

    pub async fn delete(&self, news_id: &str, comment_id: &str) -> bool {
        let token = self.store.next_token();
        self.store.dispatch(CommentIntent::EditStarted { token });

        let result = with_auth_retry(self.refresher.as_ref(), || self.api.delete(comment_id)).await;
        self.finish_edit(news_id, token, result, "Error deleting comment").await
    }

    pub async fn like(&self, comment_id: &str) -> bool {
        self.store.dispatch(CommentIntent::CommandStarted);
        let result = with_auth_retry(self.refresher.as_ref(), || self.api.like(comment_id)).await;
        self.finish_like(result, "Error saving like").await
    }

    pub async fn unlike(&self, comment_id: &str) -> bool {
        self.store.dispatch(CommentIntent::CommandStarted);
        let result = with_auth_retry(self.refresher.as_ref(), || self.api.unlike(comment_id)).await;
        self.finish_like(result, "Error removing like").await
    }

    /// Like or unlike depending on the cached like map only.
    pub async fn toggle_like(&self, comment_id: &str, username: &str) -> bool {
        if self.store.read(|s| s.is_liked_by(comment_id, username)) {
            self.unlike(comment_id).await
        } else {
            self.like(comment_id).await
        }
    }

    async fn finish_edit(
        &self,
        news_id: &str,
        token: RequestToken,
        result: Result<(), ApiError>,
        fallback: &str,
    ) -> bool {
        match result {
            Ok(()) => {
                self.store.dispatch(CommentIntent::EditSucceeded { token });
                self.load(news_id).await;
                true
            }
            Err(err) => {
                tracing::debug!(news_id, error = %err, "Comment change failed");
                self.store.dispatch(CommentIntent::EditFailed {
                    token,
                    message: err.display_message(fallback),
                });
                false
            }
        }
    }

    async fn finish_like(&self, result: Result<(), ApiError>, fallback: &str) -> bool {
        match result {
            Ok(()) => {
                self.load_likes().await;
                self.store.dispatch(CommentIntent::CommandSucceeded);
                true
            }
            Err(err) => {
                self.store.dispatch(CommentIntent::CommandFailed {
                    message: err.display_message(fallback),
                });
                false
            }
        }
    }
}
