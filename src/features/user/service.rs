use std::sync::Arc;

use chrono::Utc;

use crate::api::{with_auth_retry, ApiError, SessionRefresher, UserApi};
use crate::schema::validate::{validate_clean_password, validate_user_id, validate_user_update};
use crate::schema::{Session, UserUpdate};
use crate::state::{RequestToken, Store};

use super::intent::UserIntent;
use super::reducer::UserReducer;
use super::state::{NewsLike, UserSlot, UserState};

/// Profile, admin user management and news likes.
pub struct UserService {
    api: UserApi,
    store: Store<UserReducer>,
    refresher: Arc<dyn SessionRefresher>,
}

impl UserService {
    pub fn new(api: UserApi, refresher: Arc<dyn SessionRefresher>) -> Self {
        Self {
            api,
            store: Store::new(),
            refresher,
        }
    }

    pub fn store(&self) -> &Store<UserReducer> {
        &self.store
    }

    pub fn snapshot(&self) -> UserState {
        self.store.snapshot()
    }

    pub async fn load_profile(&self) {
        let token = self.start(UserSlot::Profile);
        match with_auth_retry(self.refresher.as_ref(), || self.api.me()).await {
            Ok(user) => self.store.dispatch(UserIntent::ProfileLoaded { token, user }),
            Err(err) => self.fail(UserSlot::Profile, token, err, "Error loading profile"),
        }
    }

    /// Startup probe: load the profile once, without refresh or retry.
    ///
    /// Returns the session the profile belongs to, or `None` for a guest.
    pub async fn probe_profile(&self) -> Option<Session> {
        let token = self.start(UserSlot::Profile);
        match self.api.me().await {
            Ok(user) => {
                let session = Session::from(&user);
                self.store.dispatch(UserIntent::ProfileLoaded { token, user });
                Some(session)
            }
            Err(err) => {
                tracing::debug!(error = %err, "No active session on startup");
                self.store.dispatch(UserIntent::ProfileCleared);
                None
            }
        }
    }

    pub async fn load_users(&self) {
        let token = self.start(UserSlot::Users);
        match with_auth_retry(self.refresher.as_ref(), || self.api.all()).await {
            Ok(users) => {
                tracing::debug!(count = users.len(), "Users loaded");
                self.store.dispatch(UserIntent::UsersLoaded { token, users });
            }
            Err(err) => self.fail(UserSlot::Users, token, err, "Error loading users"),
        }
    }

    pub async fn load_user(&self, id: &str) {
        let token = self.start(UserSlot::Selected);
        match with_auth_retry(self.refresher.as_ref(), || self.api.get(id)).await {
            Ok(user) => self.store.dispatch(UserIntent::SelectedLoaded { token, user }),
            Err(err) => self.fail(UserSlot::Selected, token, err, "Error loading user"),
        }
    }

    /// Send the changed profile fields. The stored profile is replaced by
    /// the server's answer.
    pub async fn update(&self, update: &UserUpdate) -> bool {
        self.store.dispatch(UserIntent::CommandStarted);

        if let Err(err) = validate_user_update(update, Utc::now().date_naive()) {
            self.store.dispatch(UserIntent::CommandFailed {
                message: err.to_string(),
            });
            return false;
        }

        match with_auth_retry(self.refresher.as_ref(), || self.api.update(update)).await {
            Ok(user) => {
                tracing::info!(username = %user.username, "Profile updated");
                let token = self.start(UserSlot::Profile);
                self.store.dispatch(UserIntent::ProfileLoaded { token, user });
                self.store.dispatch(UserIntent::CommandSucceeded);
                true
            }
            Err(err) => self.command_failed(err, "Error updating profile"),
        }
    }

    /// Delete the caller's own account. The caller ends the session.
    pub async fn delete_self(&self) -> bool {
        self.store.dispatch(UserIntent::CommandStarted);
        match with_auth_retry(self.refresher.as_ref(), || self.api.delete_self()).await {
            Ok(()) => {
                tracing::info!("Account deleted");
                self.store.dispatch(UserIntent::ProfileCleared);
                self.store.dispatch(UserIntent::CommandSucceeded);
                true
            }
            Err(err) => self.command_failed(err, "Error deleting account"),
        }
    }

    /// Delete another account (admin) and reload the listing.
    pub async fn delete_user(&self, id: &str) -> bool {
        self.store.dispatch(UserIntent::CommandStarted);

        if let Err(err) = validate_user_id(id) {
            self.store.dispatch(UserIntent::CommandFailed {
                message: err.to_string(),
            });
            return false;
        }

        match with_auth_retry(self.refresher.as_ref(), || self.api.delete(id)).await {
            Ok(()) => {
                tracing::info!(id, "User deleted");
                self.store.dispatch(UserIntent::CommandSucceeded);
                self.load_users().await;
                true
            }
            Err(err) => self.command_failed(err, "Error deleting user"),
        }
    }

    /// Permanently delete inactive accounts (admin) and reload the listing.
    pub async fn clean(&self, password: &str) -> bool {
        self.store.dispatch(UserIntent::CommandStarted);

        if let Err(err) = validate_clean_password(password) {
            self.store.dispatch(UserIntent::CommandFailed {
                message: err.to_string(),
            });
            return false;
        }

        match with_auth_retry(self.refresher.as_ref(), || self.api.clean(password)).await {
            Ok(()) => {
                tracing::info!("Inactive users cleaned");
                self.store.dispatch(UserIntent::CommandSucceeded);
                self.load_users().await;
                true
            }
            Err(err) => self.command_failed(err, "Error cleaning users"),
        }
    }

    pub async fn check_news_like(&self, news_id: &str) {
        let token = self.start(UserSlot::NewsLike);
        match with_auth_retry(self.refresher.as_ref(), || self.api.has_liked(news_id)).await {
            Ok(liked) => self.store.dispatch(UserIntent::NewsLikeLoaded {
                token,
                like: NewsLike {
                    news_id: news_id.to_string(),
                    liked,
                },
            }),
            Err(err) => self.fail(UserSlot::NewsLike, token, err, "Error checking like"),
        }
    }

    pub async fn like_news(&self, news_id: &str) -> bool {
        self.store.dispatch(UserIntent::CommandStarted);
        let result = with_auth_retry(self.refresher.as_ref(), || self.api.like_news(news_id)).await;
        self.finish_news_like(news_id, result, "Error saving like").await
    }

    pub async fn unlike_news(&self, news_id: &str) -> bool {
        self.store.dispatch(UserIntent::CommandStarted);
        let result = with_auth_retry(self.refresher.as_ref(), || self.api.unlike_news(news_id)).await;
        self.finish_news_like(news_id, result, "Error removing like").await
    }

    /// Like or unlike `news_id`, checking the current state first when it
    /// is not cached. Nothing is sent when that check fails.
    pub async fn toggle_news_like(&self, news_id: &str) -> bool {
        let liked = match self.cached_news_like(news_id) {
            Some(liked) => liked,
            None => {
                self.check_news_like(news_id).await;
                match self.cached_news_like(news_id) {
                    Some(liked) => liked,
                    None => {
                        let message = self
                            .store
                            .read(|s| s.news_like.error.clone())
                            .unwrap_or_else(|| "Error checking like".to_string());
                        tracing::debug!(news_id, %message, "Like state unknown, not toggling");
                        self.store.dispatch(UserIntent::CommandStarted);
                        self.store.dispatch(UserIntent::CommandFailed { message });
                        return false;
                    }
                }
            }
        };

        if liked {
            self.unlike_news(news_id).await
        } else {
            self.like_news(news_id).await
        }
    }

    fn cached_news_like(&self, news_id: &str) -> Option<bool> {
        self.store.read(|s| {
            s.news_like
                .data
                .as_ref()
                .filter(|like| like.news_id == news_id)
                .map(|like| like.liked)
        })
    }

    /// Forget the profile after the session ends.
    pub fn clear_profile(&self) {
        self.store.dispatch(UserIntent::ProfileCleared);
    }

    async fn finish_news_like(&self, news_id: &str, result: Result<(), ApiError>, fallback: &str) -> bool {
        match result {
            Ok(()) => {
                self.store.dispatch(UserIntent::CommandSucceeded);
                self.check_news_like(news_id).await;
                true
            }
            Err(err) => self.command_failed(err, fallback),
        }
    }

    fn start(&self, slot: UserSlot) -> RequestToken {
        let token = self.store.next_token();
        self.store.dispatch(UserIntent::Started { slot, token });
        token
    }

    fn fail(&self, slot: UserSlot, token: RequestToken, err: ApiError, fallback: &str) {
        tracing::debug!(?slot, error = %err, "User request failed");
        self.store.dispatch(UserIntent::Failed {
            slot,
            token,
            message: err.display_message(fallback),
        });
    }

    fn command_failed(&self, err: ApiError, fallback: &str) -> bool {
        tracing::debug!(error = %err, "User command failed");
        self.store.dispatch(UserIntent::CommandFailed {
            message: err.display_message(fallback),
        });
        false
    }
}
