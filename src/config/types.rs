use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the portal API lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST API (e.g., "https://news.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds. Unset means the transport default.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u32>,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Page sizes used by the listing views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Articles per page on the home and category listings (default: 9).
    #[serde(default = "default_news_page_size")]
    pub news_page_size: u32,
    /// Articles per page on the admin inactive listing (default: 10).
    #[serde(default = "default_inactive_page_size")]
    pub inactive_page_size: u32,
    /// Number of featured articles (default: 5).
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,
    /// Users revealed per "load more" in the admin listing (default: 10).
    #[serde(default = "default_user_increment")]
    pub user_increment: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Language code passed to the weather endpoint (default: "ES").
    #[serde(default = "default_weather_lang")]
    pub lang: String,
}

/// File logging. Off unless a file is configured or `NEWSDESK_LOG` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base path of the log file. Each run appends `.{timestamp}.{pid}`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://localhost:1234".to_string()
}

fn default_user_agent() -> String {
    format!("newsdesk/{}", env!("CARGO_PKG_VERSION"))
}

fn default_news_page_size() -> u32 {
    9
}

fn default_inactive_page_size() -> u32 {
    10
}

fn default_featured_limit() -> u32 {
    5
}

fn default_user_increment() -> usize {
    10
}

fn default_weather_lang() -> String {
    "ES".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            news_page_size: default_news_page_size(),
            inactive_page_size: default_inactive_page_size(),
            featured_limit: default_featured_limit(),
            user_increment: default_user_increment(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            lang: default_weather_lang(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}
