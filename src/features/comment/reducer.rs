//! Reducer for the comments store.

use crate::state::mvi::Reducer;
use crate::state::RequestToken;

use super::intent::CommentIntent;
use super::state::{CommentState, CommentThread};

pub struct CommentReducer;

fn begin(state: &mut CommentState, token: RequestToken) {
    state.pending.insert(token);
    state.loading = true;
    state.error = None;
}

fn finish(state: &mut CommentState, token: RequestToken) {
    state.pending.remove(&token);
    state.loading = !state.pending.is_empty();
}

impl Reducer for CommentReducer {
    type State = CommentState;
    type Intent = CommentIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommentIntent::ThreadsStarted { news_id, token } => {
                if state.news_id.as_deref() != Some(news_id.as_str()) {
                    state.threads.clear();
                    state.likes.clear();
                    state.reply_tokens.clear();
                    state.news_id = Some(news_id);
                }
                state.threads_token = state.threads_token.max(token);
                begin(&mut state, token);
            }

            CommentIntent::ThreadsLoaded { token, comments } => {
                finish(&mut state, token);
                if token == state.threads_token {
                    state.threads = comments.into_iter().map(CommentThread::new).collect();
                }
            }

            CommentIntent::ThreadsFailed { token, message } => {
                finish(&mut state, token);
                if token == state.threads_token {
                    state.error = Some(message);
                }
            }

            CommentIntent::RepliesStarted { parent_id, token } => {
                let slot = state.reply_tokens.entry(parent_id).or_insert(token);
                *slot = (*slot).max(token);
                begin(&mut state, token);
            }

            CommentIntent::RepliesLoaded {
                parent_id,
                token,
                replies,
            } => {
                finish(&mut state, token);
                if state.reply_tokens.get(&parent_id) == Some(&token) {
                    state.reply_tokens.remove(&parent_id);
                    if let Some(thread) = state
                        .threads
                        .iter_mut()
                        .find(|t| t.comment.id == parent_id)
                    {
                        thread.replies = replies;
                    }
                }
            }

            CommentIntent::RepliesFailed {
                parent_id,
                token,
                message,
            } => {
                finish(&mut state, token);
                if state.reply_tokens.get(&parent_id) == Some(&token) {
                    state.reply_tokens.remove(&parent_id);
                    state.error = Some(message);
                }
            }

            CommentIntent::LikesStarted { token } => {
                state.likes_token = state.likes_token.max(token);
                begin(&mut state, token);
            }

            CommentIntent::LikesLoaded { token, likes } => {
                finish(&mut state, token);
                if token == state.likes_token {
                    state.likes = likes
                        .into_iter()
                        .map(|(id, users)| (id, users.into_iter().collect()))
                        .collect();
                }
            }

            CommentIntent::LikesFailed { token, message } => {
                finish(&mut state, token);
                if token == state.likes_token {
                    state.error = Some(message);
                }
            }

            CommentIntent::EditStarted { token } => begin(&mut state, token),
            CommentIntent::EditSucceeded { token } => finish(&mut state, token),
            CommentIntent::EditFailed { token, message } => {
                finish(&mut state, token);
                state.error = Some(message);
            }

            CommentIntent::CommandStarted => state.result.start(),
            CommentIntent::CommandSucceeded => state.result.succeed(),
            CommentIntent::CommandFailed { message } => state.result.fail(message),
        }
        state
    }
}
