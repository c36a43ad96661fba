use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::schema::{User, UserUpdate};

use super::client::{ApiClient, ApiPath};
use super::error::ApiError;

#[derive(Deserialize)]
struct LikedReply {
    liked: bool,
}

/// `/user/*` endpoints. Everything here needs an active session.
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.client.get("/user/", &[]).await
    }

    pub async fn all(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/user/getall", &[]).await
    }

    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        self.client.get(ApiPath::with_id("/user", id), &[]).await
    }

    pub async fn update(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.client
            .send(Method::PATCH, "/user/update", Some(json!({ "user": update })))
            .await
    }

    pub async fn delete_self(&self) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::POST, "/user/delete", Some(json!({})))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::DELETE, ApiPath::with_id("/user", id), None)
            .await
    }

    /// Permanently delete inactive accounts.
    pub async fn clean(&self, password: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::DELETE, "/user/erase", Some(json!({ "password": password })))
            .await
    }

    pub async fn like_news(&self, news_id: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::POST, ApiPath::with_id("/user/like", news_id), Some(json!({})))
            .await
    }

    pub async fn unlike_news(&self, news_id: &str) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::DELETE, ApiPath::with_id("/user/like", news_id), None)
            .await
    }

    pub async fn has_liked(&self, news_id: &str) -> Result<bool, ApiError> {
        let reply: LikedReply = self
            .client
            .get(ApiPath::with_id("/user/like", news_id), &[])
            .await?;
        Ok(reply.liked)
    }
}
