//! Decisions the comment section makes from the cached snapshot alone.

use crate::features::auth::AuthState;
use crate::features::comment::CommentState;
use crate::schema::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

/// What a like click on `comment_id` does, from the cached like map.
///
/// `None` when nobody is logged in.
pub fn like_action(comments: &CommentState, comment_id: &str, auth: &AuthState) -> Option<LikeAction> {
    if !auth.is_authenticated() {
        return None;
    }
    let username = auth.username()?;
    if comments.is_liked_by(comment_id, username) {
        Some(LikeAction::Unlike)
    } else {
        Some(LikeAction::Like)
    }
}

/// Replies are fetched once, and only for threads that have any.
pub fn should_fetch_replies(comments: &CommentState, parent_id: &str) -> bool {
    comments
        .thread(parent_id)
        .is_some_and(|t| t.comment.reply_count > 0 && t.replies.is_empty())
}

/// Only the author may edit or delete a comment.
pub fn can_modify(comment: &Comment, auth: &AuthState) -> bool {
    auth.is_authenticated() && auth.username() == Some(comment.username.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LikeMap;
    use crate::features::auth::SessionStatus;
    use crate::features::comment::{CommentIntent, CommentReducer};
    use crate::schema::{Role, Session};
    use crate::state::mvi::Reducer;

    fn comment(id: &str, author: &str, replies: u64) -> Comment {
        Comment {
            id: id.into(),
            news_id: Some("n1".into()),
            user_id: format!("u-{author}"),
            parent_id: None,
            content: "hola".into(),
            created: None,
            like_count: 0,
            reply_count: replies,
            username: author.into(),
        }
    }

    fn logged_in(name: &str) -> AuthState {
        AuthState {
            status: SessionStatus::LoggedIn,
            session: Some(Session {
                username: name.into(),
                role: Role::User,
            }),
            ..AuthState::default()
        }
    }

    fn comments() -> CommentState {
        let state = CommentReducer::reduce(
            CommentState::default(),
            CommentIntent::ThreadsStarted {
                news_id: "n1".into(),
                token: 1,
            },
        );
        let state = CommentReducer::reduce(
            state,
            CommentIntent::ThreadsLoaded {
                token: 1,
                comments: vec![comment("c1", "ana", 2), comment("c2", "luis", 0)],
            },
        );
        let mut likes = LikeMap::new();
        likes.insert("c1".into(), vec!["ana".into()]);
        let state = CommentReducer::reduce(state, CommentIntent::LikesStarted { token: 2 });
        CommentReducer::reduce(state, CommentIntent::LikesLoaded { token: 2, likes })
    }

    #[test]
    fn already_liked_comment_toggles_to_unlike() {
        let state = comments();
        assert_eq!(like_action(&state, "c1", &logged_in("ana")), Some(LikeAction::Unlike));
        assert_eq!(like_action(&state, "c2", &logged_in("ana")), Some(LikeAction::Like));
        assert_eq!(like_action(&state, "c1", &logged_in("luis")), Some(LikeAction::Like));
        assert_eq!(like_action(&state, "c1", &AuthState::default()), None);
    }

    #[test]
    fn replies_fetched_only_when_present_and_missing() {
        let state = comments();
        assert!(should_fetch_replies(&state, "c1"));
        assert!(!should_fetch_replies(&state, "c2"));
        assert!(!should_fetch_replies(&state, "missing"));
    }

    #[test]
    fn only_author_can_modify() {
        let own = comment("c1", "ana", 0);
        assert!(can_modify(&own, &logged_in("ana")));
        assert!(!can_modify(&own, &logged_in("luis")));
        assert!(!can_modify(&own, &AuthState::default()));
    }
}
