//! Reducer for the user store.

use crate::state::mvi::Reducer;

use super::intent::UserIntent;
use super::state::{UserSlot, UserState};

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Intent = UserIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserIntent::Started { slot, token } => match slot {
                UserSlot::Profile => state.profile.start(token),
                UserSlot::Users => state.users.start(token),
                UserSlot::Selected => state.selected.start(token),
                UserSlot::NewsLike => state.news_like.start(token),
            },

            UserIntent::Failed {
                slot,
                token,
                message,
            } => {
                match slot {
                    UserSlot::Profile => state.profile.fail(token, message),
                    UserSlot::Users => state.users.fail(token, message),
                    UserSlot::Selected => state.selected.fail(token, message),
                    UserSlot::NewsLike => state.news_like.fail(token, message),
                };
            }

            UserIntent::ProfileLoaded { token, user } => {
                state.profile.accept(token, user);
            }
            UserIntent::UsersLoaded { token, users } => {
                state.users.accept(token, users);
            }
            UserIntent::SelectedLoaded { token, user } => {
                state.selected.accept(token, user);
            }
            UserIntent::NewsLikeLoaded { token, like } => {
                state.news_like.accept(token, like);
            }

            UserIntent::ProfileCleared => {
                state.profile.clear();
                state.news_like.clear();
            }

            UserIntent::CommandStarted => state.result.start(),
            UserIntent::CommandSucceeded => state.result.succeed(),
            UserIntent::CommandFailed { message } => state.result.fail(message),
        }
        state
    }
}
