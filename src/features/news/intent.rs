//! Intents for the news store.

use crate::schema::News;
use crate::state::mvi::Intent;
use crate::state::RequestToken;

use super::state::NewsList;

#[derive(Debug, Clone)]
pub enum NewsIntent {
    /// A page request was sent. `fresh` is set for offset 0.
    PageStarted {
        list: NewsList,
        page: u32,
        fresh: bool,
        token: RequestToken,
    },

    PageLoaded {
        list: NewsList,
        page: u32,
        fresh: bool,
        token: RequestToken,
        records: Vec<News>,
        total: u64,
    },

    PageFailed {
        list: NewsList,
        page: u32,
        token: RequestToken,
        message: String,
    },

    FeaturedStarted { token: RequestToken },
    FeaturedLoaded { token: RequestToken, news: Vec<News> },
    FeaturedFailed { token: RequestToken, message: String },

    ArticleStarted { token: RequestToken },
    ArticleLoaded { token: RequestToken, news: News },
    ArticleFailed { token: RequestToken, message: String },

    SearchStarted { token: RequestToken, query: String },
    SearchLoaded { token: RequestToken, news: Vec<News> },
    SearchFailed { token: RequestToken, message: String },

    /// A record changed status or records were added or removed on the
    /// server. Every cached page is dropped.
    RecordsChanged { token: RequestToken },

    CommandStarted,
    CommandSucceeded { message: Option<String> },
    CommandFailed { message: String },
}

impl Intent for NewsIntent {}
