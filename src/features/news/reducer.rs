//! Reducer for the news store.

use crate::state::mvi::Reducer;

use super::intent::NewsIntent;
use super::state::{NewsList, NewsState};

pub struct NewsReducer;

impl Reducer for NewsReducer {
    type State = NewsState;
    type Intent = NewsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NewsIntent::PageStarted {
                list,
                page,
                fresh,
                token,
            } => {
                if let NewsList::Category(category) = list {
                    if state.current_category != Some(category) {
                        state.category.invalidate(token);
                        state.current_category = Some(category);
                    }
                }
                state.list_mut(list).start(page, fresh, token);
            }

            NewsIntent::PageLoaded {
                list,
                page,
                fresh,
                token,
                records,
                total,
            } => {
                state.list_mut(list).accept(page, fresh, token, records, total);
            }

            NewsIntent::PageFailed {
                list,
                page,
                token,
                message,
            } => {
                state.list_mut(list).fail(page, token, message);
            }

            NewsIntent::FeaturedStarted { token } => state.featured.start(token),
            NewsIntent::FeaturedLoaded { token, news } => {
                state.featured.accept(token, news);
            }
            NewsIntent::FeaturedFailed { token, message } => {
                state.featured.fail(token, message);
            }

            NewsIntent::ArticleStarted { token } => state.article.start(token),
            NewsIntent::ArticleLoaded { token, news } => {
                state.article.accept(token, news);
            }
            NewsIntent::ArticleFailed { token, message } => {
                state.article.fail(token, message);
            }

            NewsIntent::SearchStarted { token, query } => {
                state.search.start(token);
                state.search_query = Some(query);
            }
            NewsIntent::SearchLoaded { token, news } => {
                state.search.accept(token, news);
            }
            NewsIntent::SearchFailed { token, message } => {
                state.search.fail(token, message);
            }

            NewsIntent::RecordsChanged { token } => {
                state.latest.invalidate(token);
                state.inactive.invalidate(token);
                state.category.invalidate(token);
            }

            NewsIntent::CommandStarted => {
                state.result.start();
                state.last_message = None;
            }
            NewsIntent::CommandSucceeded { message } => {
                state.result.succeed();
                state.last_message = message;
            }
            NewsIntent::CommandFailed { message } => state.result.fail(message),
        }
        state
    }
}
