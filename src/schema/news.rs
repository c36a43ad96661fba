use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::validate::ValidationError;

/// News category as understood by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entertainment,
    World,
    Business,
    Health,
    Sport,
    Science,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Entertainment,
        Category::World,
        Category::Business,
        Category::Health,
        Category::Sport,
        Category::Science,
        Category::Technology,
    ];

    /// Wire value, also used in `/category/:category` routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entertainment => "entertainment",
            Category::World => "world",
            Category::Business => "business",
            Category::Health => "health",
            Category::Sport => "sport",
            Category::Science => "science",
            Category::Technology => "technology",
        }
    }

    /// Label shown to readers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Entertainment => "Entretenimiento",
            Category::World => "Internacional",
            Category::Business => "Empresarial",
            Category::Health => "Salud",
            Category::Sport => "Deportes",
            Category::Science => "Ciencia",
            Category::Technology => "Tecnologia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// A news article as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub id: String,
    pub title: String,
    pub snippet: String,
    #[serde(rename = "newsUrl")]
    pub url: String,
    pub publisher: String,
    pub timestamp: String,
    #[serde(rename = "image_url", default)]
    pub image: Option<String>,
    #[serde(rename = "hasSubnews", default)]
    pub has_subnews: bool,
    #[serde(rename = "likes", default)]
    pub like_count: u64,
    #[serde(rename = "is_active", default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl News {
    /// Publication time. The feed sends either epoch milliseconds or RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(millis) = self.timestamp.parse::<i64>() {
            return Utc.timestamp_millis_opt(millis).single();
        }
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

/// Paginated list envelope: `{ "data": [...], "total": n }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}
