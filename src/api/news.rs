use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::schema::{Category, News, Paged};

use super::client::{ApiClient, ApiPath};
use super::error::ApiError;

#[derive(Deserialize)]
struct CleanReply {
    #[serde(default)]
    message: String,
}

/// `/news/*` endpoints.
#[derive(Clone)]
pub struct NewsApi {
    client: ApiClient,
}

fn page_query(limit: u32, offset: u32) -> [(&'static str, String); 2] {
    [("limit", limit.to_string()), ("offset", offset.to_string())]
}

impl NewsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, limit: u32, offset: u32) -> Result<Paged<News>, ApiError> {
        self.client.get("/news", &page_query(limit, offset)).await
    }

    pub async fn list_inactive(&self, limit: u32, offset: u32) -> Result<Paged<News>, ApiError> {
        self.client.get("/news/inactive", &page_query(limit, offset)).await
    }

    pub async fn list_by_category(
        &self,
        category: Category,
        limit: u32,
        offset: u32,
    ) -> Result<Paged<News>, ApiError> {
        let path = ApiPath::with_id("/news/category", category.as_str());
        self.client.get(path, &page_query(limit, offset)).await
    }

    pub async fn featured(&self, limit: u32) -> Result<Vec<News>, ApiError> {
        self.client
            .get("/news/featured", &[("limit", limit.to_string())])
            .await
    }

    pub async fn get(&self, id: &str) -> Result<News, ApiError> {
        self.client.get(ApiPath::with_id("/news", id), &[]).await
    }

    pub async fn search(&self, text: &str) -> Result<Vec<News>, ApiError> {
        self.client
            .get("/news/search", &[("q", text.to_string())])
            .await
    }

    /// Flip the active flag. The server answers with the new value.
    pub async fn change_status(&self, id: &str) -> Result<bool, ApiError> {
        self.client
            .send(Method::POST, ApiPath::with_id("/news", id), Some(json!({})))
            .await
    }

    /// Permanently delete inactive news. Returns the server's summary.
    pub async fn clean(&self, password: &str) -> Result<String, ApiError> {
        let reply: CleanReply = self
            .client
            .send(Method::DELETE, "/news/clean", Some(json!({ "password": password })))
            .await?;
        Ok(reply.message)
    }

    /// Ask the server to pull fresh articles from its upstream source.
    pub async fn fetch_from_source(&self) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::POST, "/news/fetch", Some(json!({})))
            .await
    }
}
