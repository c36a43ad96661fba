use std::sync::Arc;

use crate::api::{with_auth_retry, ApiError, NewsApi, SessionRefresher};
use crate::schema::validate::validate_clean_password;
use crate::schema::{News, Paged};
use crate::state::{page_key, page_offset, Store};

use super::intent::NewsIntent;
use super::reducer::NewsReducer;
use super::state::{NewsList, NewsState};

/// Fetches news into the store and runs the admin news commands.
pub struct NewsService {
    api: NewsApi,
    store: Store<NewsReducer>,
    refresher: Arc<dyn SessionRefresher>,
}

impl NewsService {
    pub fn new(api: NewsApi, refresher: Arc<dyn SessionRefresher>) -> Self {
        Self {
            api,
            store: Store::new(),
            refresher,
        }
    }

    pub fn store(&self) -> &Store<NewsReducer> {
        &self.store
    }

    pub fn snapshot(&self) -> NewsState {
        self.store.snapshot()
    }

    /// Fetch `limit` records of `list` starting at `offset`.
    ///
    /// The page lands under `offset / limit + 1`. Offset 0 replaces every
    /// cached page of the listing.
    pub async fn load_page(&self, list: NewsList, limit: u32, offset: u32) {
        let page = page_key(offset, limit);
        let fresh = offset == 0;
        let token = self.store.next_token();
        self.store.dispatch(NewsIntent::PageStarted {
            list,
            page,
            fresh,
            token,
        });

        tracing::debug!(?list, page, limit, offset, "Loading news page");
        let result = self.request_page(list, limit, offset).await;

        if !self.store.read(|s| s.list(list).is_current(page, token)) {
            tracing::warn!(?list, page, token, "Discarding superseded news page");
        }

        match result {
            Ok(paged) => self.store.dispatch(NewsIntent::PageLoaded {
                list,
                page,
                fresh,
                token,
                records: paged.data,
                total: paged.total,
            }),
            Err(err) => {
                tracing::debug!(?list, page, error = %err, "News page failed");
                self.store.dispatch(NewsIntent::PageFailed {
                    list,
                    page,
                    token,
                    message: err.display_message(list_fallback(list)),
                });
            }
        }
    }

    /// Show `page`, fetching it only when it is not cached yet.
    pub async fn ensure_page(&self, list: NewsList, page: u32, limit: u32) {
        if self.store.read(|s| s.has_page(list, page)) {
            return;
        }
        self.load_page(list, limit, page_offset(page, limit)).await;
    }

    async fn request_page(&self, list: NewsList, limit: u32, offset: u32) -> Result<Paged<News>, ApiError> {
        match list {
            NewsList::Latest => self.api.list(limit, offset).await,
            NewsList::Inactive => {
                with_auth_retry(self.refresher.as_ref(), || self.api.list_inactive(limit, offset)).await
            }
            NewsList::Category(category) => self.api.list_by_category(category, limit, offset).await,
        }
    }

    pub async fn load_featured(&self, limit: u32) {
        let token = self.store.next_token();
        self.store.dispatch(NewsIntent::FeaturedStarted { token });

        match self.api.featured(limit).await {
            Ok(news) => self.store.dispatch(NewsIntent::FeaturedLoaded { token, news }),
            Err(err) => self.store.dispatch(NewsIntent::FeaturedFailed {
                token,
                message: err.display_message("Error loading featured news"),
            }),
        }
    }

    pub async fn load_article(&self, id: &str) {
        let token = self.store.next_token();
        self.store.dispatch(NewsIntent::ArticleStarted { token });

        match self.api.get(id).await {
            Ok(news) => self.store.dispatch(NewsIntent::ArticleLoaded { token, news }),
            Err(err) => {
                tracing::debug!(id, error = %err, "Article failed");
                self.store.dispatch(NewsIntent::ArticleFailed {
                    token,
                    message: err.display_message("Error loading the article"),
                });
            }
        }
    }

    pub async fn search(&self, text: &str) {
        let query = text.trim().to_string();
        let token = self.store.next_token();
        self.store.dispatch(NewsIntent::SearchStarted {
            token,
            query: query.clone(),
        });

        if query.is_empty() {
            self.store.dispatch(NewsIntent::SearchFailed {
                token,
                message: "Search text is required".to_string(),
            });
            return;
        }

        match self.api.search(&query).await {
            Ok(news) => {
                tracing::debug!(query = %query, hits = news.len(), "Search finished");
                self.store.dispatch(NewsIntent::SearchLoaded { token, news });
            }
            Err(err) => self.store.dispatch(NewsIntent::SearchFailed {
                token,
                message: err.display_message("Error searching news"),
            }),
        }
    }

    /// Flip the active flag of `id`. Every cached listing is dropped on success.
    pub async fn toggle_status(&self, id: &str) -> bool {
        self.store.dispatch(NewsIntent::CommandStarted);

        let result = with_auth_retry(self.refresher.as_ref(), || self.api.change_status(id)).await;
        match result {
            Ok(active) => {
                tracing::info!(id, active, "News status changed");
                self.records_changed();
                self.store
                    .dispatch(NewsIntent::CommandSucceeded { message: None });
                true
            }
            Err(err) => self.command_failed(err, "Error changing news status"),
        }
    }

    /// Permanently delete every inactive article.
    pub async fn clean(&self, password: &str) -> bool {
        self.store.dispatch(NewsIntent::CommandStarted);

        if let Err(err) = validate_clean_password(password) {
            self.store.dispatch(NewsIntent::CommandFailed {
                message: err.to_string(),
            });
            return false;
        }

        let result = with_auth_retry(self.refresher.as_ref(), || self.api.clean(password)).await;
        match result {
            Ok(message) => {
                tracing::info!(summary = %message, "Inactive news cleaned");
                self.records_changed();
                let message = Some(message).filter(|m| !m.is_empty());
                self.store.dispatch(NewsIntent::CommandSucceeded { message });
                true
            }
            Err(err) => self.command_failed(err, "Error cleaning news"),
        }
    }

    /// Have the server import fresh articles from its upstream feed.
    pub async fn fetch_from_source(&self) -> bool {
        self.store.dispatch(NewsIntent::CommandStarted);

        let result = with_auth_retry(self.refresher.as_ref(), || self.api.fetch_from_source()).await;
        match result {
            Ok(()) => {
                tracing::info!("Imported news from upstream source");
                self.records_changed();
                self.store
                    .dispatch(NewsIntent::CommandSucceeded { message: None });
                true
            }
            Err(err) => self.command_failed(err, "Error fetching news"),
        }
    }

    fn records_changed(&self) {
        let token = self.store.next_token();
        self.store.dispatch(NewsIntent::RecordsChanged { token });
    }

    fn command_failed(&self, err: ApiError, fallback: &str) -> bool {
        tracing::debug!(error = %err, "News command failed");
        self.store.dispatch(NewsIntent::CommandFailed {
            message: err.display_message(fallback),
        });
        false
    }
}

fn list_fallback(list: NewsList) -> &'static str {
    match list {
        NewsList::Latest => "Error loading news",
        NewsList::Inactive => "Error loading inactive news",
        NewsList::Category(_) => "Error loading category news",
    }
}
