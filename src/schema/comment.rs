use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment or reply on a news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub news_id: Option<String>,
    pub user_id: String,
    #[serde(rename = "parent_comment_id", default)]
    pub parent_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "likes", default)]
    pub like_count: u64,
    #[serde(rename = "replies", default)]
    pub reply_count: u64,
    pub username: String,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Body of `POST /comment/{newsId}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment<'a> {
    pub comment: &'a str,
    #[serde(rename = "parentCommentId", skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<&'a str>,
}
