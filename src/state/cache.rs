//! Cache-shaped building blocks shared by the feature states.
//!
//! Every slot that can be fetched carries the token of the newest request
//! issued for it. A response whose token is no longer the newest is stale
//! and gets dropped instead of overwriting fresher data.

use std::collections::BTreeMap;

/// Monotonic per-store request identifier, see [`crate::state::Store::next_token`].
pub type RequestToken = u64;

/// 1-based page key for a `limit`/`offset` pair: `floor(offset / limit) + 1`.
pub fn page_key(offset: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    offset / limit + 1
}

/// Offset of the first record on `page`.
pub fn page_offset(page: u32, limit: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Paginated collection: page number to records, plus the server total.
///
/// A fresh query (offset 0) opens a new epoch. Requests issued before the
/// epoch are discarded when they answer, and a successful fresh query
/// replaces every cached page with page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCache<T> {
    pub pages: BTreeMap<u32, Vec<T>>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    epoch: RequestToken,
    pending: BTreeMap<u32, RequestToken>,
}

impl<T> Default for PageCache<T> {
    fn default() -> Self {
        Self {
            pages: BTreeMap::new(),
            total: 0,
            loading: false,
            error: None,
            epoch: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<T> PageCache<T> {
    pub fn page(&self, page: u32) -> Option<&[T]> {
        self.pages.get(&page).map(Vec::as_slice)
    }

    pub fn has_page(&self, page: u32) -> bool {
        self.pages.contains_key(&page)
    }

    /// Record that `page` was requested with `token`.
    pub fn start(&mut self, page: u32, fresh: bool, token: RequestToken) {
        if fresh {
            self.epoch = self.epoch.max(token);
            let epoch = self.epoch;
            self.pending.retain(|_, pending| *pending >= epoch);
        }
        let slot = self.pending.entry(page).or_insert(token);
        *slot = (*slot).max(token);
        self.loading = true;
        self.error = None;
    }

    /// Store a page response. Returns `false` when the response is stale.
    pub fn accept(
        &mut self,
        page: u32,
        fresh: bool,
        token: RequestToken,
        records: Vec<T>,
        total: u64,
    ) -> bool {
        if !self.is_current(page, token) {
            return false;
        }
        self.pending.remove(&page);
        if fresh {
            self.pages.clear();
        }
        self.pages.insert(page, records);
        self.total = total;
        self.loading = !self.pending.is_empty();
        true
    }

    /// Record a failed page request. Returns `false` when the failure is stale.
    pub fn fail(&mut self, page: u32, token: RequestToken, message: String) -> bool {
        if !self.is_current(page, token) {
            return false;
        }
        self.pending.remove(&page);
        self.loading = !self.pending.is_empty();
        self.error = Some(message);
        true
    }

    /// Drop every cached page and every in-flight request.
    pub fn invalidate(&mut self, token: RequestToken) {
        self.epoch = self.epoch.max(token);
        self.pending.clear();
        self.pages.clear();
        self.loading = false;
    }

    /// Whether `token` is still the newest request for `page` in this epoch.
    pub fn is_current(&self, page: u32, token: RequestToken) -> bool {
        token >= self.epoch && self.pending.get(&page) == Some(&token)
    }
}

/// A single fetched value (an article, a profile, the weather).
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    latest: RequestToken,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            latest: 0,
        }
    }
}

impl<T> Resource<T> {
    pub fn start(&mut self, token: RequestToken) {
        self.latest = self.latest.max(token);
        self.loading = true;
        self.error = None;
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token == self.latest
    }

    pub fn accept(&mut self, token: RequestToken, data: T) -> bool {
        if !self.is_latest(token) {
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        true
    }

    pub fn fail(&mut self, token: RequestToken, message: String) -> bool {
        if !self.is_latest(token) {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    pub fn clear(&mut self) {
        self.data = None;
        self.loading = false;
        self.error = None;
    }
}

/// Outcome of the last fire-and-forget command (like, delete, clean...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandStatus {
    pub succeeded: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl CommandStatus {
    pub fn start(&mut self) {
        *self = Self {
            succeeded: false,
            loading: true,
            error: None,
        };
    }

    pub fn succeed(&mut self) {
        *self = Self {
            succeeded: true,
            loading: false,
            error: None,
        };
    }

    pub fn fail(&mut self, message: String) {
        *self = Self {
            succeeded: false,
            loading: false,
            error: Some(message),
        };
    }
}
