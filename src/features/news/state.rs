//! State for the news feature.

use crate::schema::{Category, News};
use crate::state::mvi::UiState;
use crate::state::{CommandStatus, PageCache, Resource};

/// Which paginated listing a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsList {
    /// Active news, newest first.
    Latest,
    /// Deactivated news (admin only).
    Inactive,
    /// Active news of one category. Switching category is a fresh query.
    Category(Category),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsState {
    pub latest: PageCache<News>,
    pub inactive: PageCache<News>,
    pub category: PageCache<News>,
    /// Category whose pages `category` holds.
    pub current_category: Option<Category>,
    pub featured: Resource<Vec<News>>,
    pub article: Resource<News>,
    pub search: Resource<Vec<News>>,
    pub search_query: Option<String>,
    /// Outcome of the last admin command (status toggle, clean, fetch).
    pub result: CommandStatus,
    /// Summary returned by the last clean operation.
    pub last_message: Option<String>,
}

impl UiState for NewsState {}

impl NewsState {
    pub fn list(&self, list: NewsList) -> &PageCache<News> {
        match list {
            NewsList::Latest => &self.latest,
            NewsList::Inactive => &self.inactive,
            NewsList::Category(_) => &self.category,
        }
    }

    pub(super) fn list_mut(&mut self, list: NewsList) -> &mut PageCache<News> {
        match list {
            NewsList::Latest => &mut self.latest,
            NewsList::Inactive => &mut self.inactive,
            NewsList::Category(_) => &mut self.category,
        }
    }

    /// Whether `page` of `list` is cached and can be shown without a fetch.
    pub fn has_page(&self, list: NewsList, page: u32) -> bool {
        if let NewsList::Category(category) = list {
            if self.current_category != Some(category) {
                return false;
            }
        }
        self.list(list).has_page(page)
    }
}
