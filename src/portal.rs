//! Owner of every feature service, and the cross-feature follow-ups.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, AuthApi, CommentApi, LocationApi, NewsApi, SessionRefresher, UserApi};
use crate::config::Config;
use crate::features::auth::{AuthService, SessionStatus};
use crate::features::comment::CommentService;
use crate::features::location::LocationService;
use crate::features::news::{NewsList, NewsService};
use crate::features::user::UserService;
use crate::features::weather::WeatherService;
use crate::schema::{Credentials, UserInput};
use crate::session::{detect_session, guard, GuardDecision, Route};
use crate::view::Pager;

/// Every store of the portal, built once and passed around by reference.
pub struct Portal {
    config: Config,
    auth: Arc<AuthService>,
    users: UserService,
    news: NewsService,
    comments: CommentService,
    location: LocationService,
    weather: WeatherService,
}

impl Portal {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api)?;
        tracing::debug!(base_url = %client.base_url(), "Portal client ready");

        let auth = Arc::new(AuthService::new(AuthApi::new(client.clone())));
        let refresher: Arc<dyn SessionRefresher> = auth.clone();

        Ok(Self {
            users: UserService::new(UserApi::new(client.clone()), refresher.clone()),
            news: NewsService::new(NewsApi::new(client.clone()), refresher.clone()),
            comments: CommentService::new(CommentApi::new(client.clone()), refresher),
            location: LocationService::new(LocationApi::new(client.clone())),
            weather: WeatherService::new(LocationApi::new(client), config.weather.lang.clone()),
            auth,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn news(&self) -> &NewsService {
        &self.news
    }

    pub fn comments(&self) -> &CommentService {
        &self.comments
    }

    pub fn location(&self) -> &LocationService {
        &self.location
    }

    pub fn weather(&self) -> &WeatherService {
        &self.weather
    }

    /// Detect the session. A session recovered through refresh also gets
    /// its profile loaded.
    pub async fn start(&self) -> SessionStatus {
        let status = detect_session(&self.auth, &self.users).await;
        if status == SessionStatus::LoggedIn && self.users.store().read(|s| s.profile.data.is_none()) {
            self.users.load_profile().await;
        }
        status
    }

    /// Parse `path` and check it against the current session.
    pub fn navigate(&self, path: &str) -> (Route, GuardDecision) {
        let route = Route::parse(path);
        let decision = self.auth.store().read(|auth| guard(&route, auth));
        if let GuardDecision::Redirect(target) = &decision {
            tracing::debug!(from = %route, to = %target, "Navigation redirected");
        }
        (route, decision)
    }

    pub async fn login(&self, credentials: &Credentials) -> bool {
        if !self.auth.login(credentials).await {
            return false;
        }
        self.users.load_profile().await;
        true
    }

    pub async fn register(&self, input: &UserInput) -> bool {
        if !self.auth.register(input).await {
            return false;
        }
        self.users.load_profile().await;
        true
    }

    pub async fn logout(&self) -> bool {
        let ok = self.auth.logout().await;
        self.users.clear_profile();
        ok
    }

    /// Delete the caller's account and end the session.
    pub async fn delete_account(&self) -> bool {
        if !self.users.delete_self().await {
            return false;
        }
        self.auth.end_session();
        true
    }

    /// Show `page` of `list`, fetching it only when it is not cached.
    ///
    /// Returns the page shown, or `None` without a request when `page` is 0,
    /// when its offset does not fit the API, or when it lies past the end of
    /// a listing whose total is already known.
    pub async fn go_to_page(&self, list: NewsList, page: u32) -> Option<u32> {
        if self.news.store().read(|s| s.has_page(list, page)) {
            return Some(page);
        }

        let limit = self.page_size(list);
        page.checked_sub(1)?.checked_mul(limit)?;
        if let Some(total) = self.known_total(list) {
            if Pager::new(page, total, limit).go_to(page).is_none() {
                tracing::debug!(?list, page, total, "Page out of range");
                return None;
            }
        }

        self.news.ensure_page(list, page, limit).await;
        Some(page)
    }

    /// Page after `current`, once the listing total is known.
    pub async fn next_page(&self, list: NewsList, current: u32) -> Option<u32> {
        let total = self.known_total(list)?;
        let target = Pager::new(current, total, self.page_size(list)).next()?;
        self.go_to_page(list, target).await
    }

    /// Page before `current`, once the listing total is known.
    pub async fn previous_page(&self, list: NewsList, current: u32) -> Option<u32> {
        let total = self.known_total(list)?;
        let target = Pager::new(current, total, self.page_size(list)).previous()?;
        self.go_to_page(list, target).await
    }

    /// Records per page of `list`.
    pub fn page_size(&self, list: NewsList) -> u32 {
        match list {
            NewsList::Inactive => self.config.paging.inactive_page_size,
            NewsList::Latest | NewsList::Category(_) => self.config.paging.news_page_size,
        }
    }

    /// Server total of `list`, when at least one of its pages is cached.
    fn known_total(&self, list: NewsList) -> Option<u64> {
        self.news.store().read(|s| {
            if let NewsList::Category(category) = list {
                if s.current_category != Some(category) {
                    return None;
                }
            }
            let cache = s.list(list);
            (!cache.pages.is_empty()).then_some(cache.total)
        })
    }

    pub async fn load_featured(&self) {
        self.news.load_featured(self.config.paging.featured_limit).await;
    }

    /// Toggle the active flag of `id`, then reload the inactive page the
    /// admin is looking at.
    pub async fn toggle_news_status(&self, id: &str, inactive_page: u32) -> bool {
        if !self.news.toggle_status(id).await {
            return false;
        }
        self.go_to_page(NewsList::Inactive, inactive_page).await;
        true
    }

    /// Weather for the caller's location. The location is looked up first
    /// when it is not known yet.
    pub async fn load_weather(&self) {
        if self.location.store().read(|s| s.coordinates().is_none()) {
            self.location.load().await;
        }
        match self.location.store().read(|s| s.coordinates()) {
            Some(coordinates) => self.weather.load(coordinates).await,
            None => tracing::debug!("No location, skipping weather"),
        }
    }
}
