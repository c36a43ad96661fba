use std::collections::BTreeMap;

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::schema::{Comment, NewComment};

use super::client::{ApiClient, ApiPath};
use super::error::ApiError;

#[derive(Deserialize)]
struct CommentList {
    comments: Vec<Comment>,
}

#[derive(Deserialize)]
struct ReplyList {
    comment: Vec<Comment>,
}

/// Usernames that liked each comment, keyed by comment id.
pub type LikeMap = BTreeMap<String, Vec<String>>;

/// `/comment/*` endpoints.
#[derive(Clone)]
pub struct CommentApi {
    client: ApiClient,
}

impl CommentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, news_id: &str) -> Result<Vec<Comment>, ApiError> {
        let list: CommentList = self
            .client
            .get(ApiPath::with_id("/comment", news_id), &[])
            .await?;
        Ok(list.comments)
    }

    pub async fn replies(&self, parent_id: &str) -> Result<Vec<Comment>, ApiError> {
        let list: ReplyList = self
            .client
            .get(ApiPath::with_id("/comment/replies", parent_id), &[])
            .await?;
        Ok(list.comment)
    }

    pub async fn likes(&self, comment_ids: &[String]) -> Result<LikeMap, ApiError> {
        self.client
            .send(
                Method::POST,
                "/comment/likes/batch",
                Some(json!({ "comments": comment_ids })),
            )
            .await
    }

    pub async fn add(&self, news_id: &str, comment: &NewComment<'_>) -> Result<(), ApiError> {
        self.client
            .send_unit(
                Method::POST,
                ApiPath::with_id("/comment", news_id),
                Some(json!(comment)),
            )
            .await
    }

    pub async fn update(&self, comment_id: &str, content: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(
                Method::PATCH,
                ApiPath::with_id("/comment", comment_id),
                Some(json!({ "comment": content })),
            )
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::DELETE, ApiPath::with_id("/comment", comment_id), None)
            .await
    }

    pub async fn like(&self, comment_id: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(
                Method::POST,
                ApiPath::with_id("/comment/like", comment_id),
                Some(json!({})),
            )
            .await
    }

    pub async fn unlike(&self, comment_id: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::DELETE, ApiPath::with_id("/comment/like", comment_id), None)
            .await
    }
}
