use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

use super::error::ApiError;

/// Query string pairs appended to a request URL.
pub type Query<'a> = &'a [(&'a str, String)];

/// Request path below the base URL.
///
/// The fixed part is trusted text starting with `/`. A caller-supplied id
/// is pushed as one percent-encoded segment, so `?`, `#` or `/` inside it
/// cannot change the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    fixed: &'static str,
    id: Option<String>,
}

impl ApiPath {
    pub fn with_id(fixed: &'static str, id: &str) -> Self {
        Self {
            fixed,
            id: Some(id.to_string()),
        }
    }
}

impl From<&'static str> for ApiPath {
    fn from(fixed: &'static str) -> Self {
        Self { fixed, id: None }
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}/{}", self.fixed, id),
            None => f.write_str(self.fixed),
        }
    }
}

/// Thin JSON transport to the portal API.
///
/// One cookie jar is shared by every clone, so the HTTP-only session
/// cookie set by login or refresh rides along on every later call.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.clone());

        if let Some(seconds) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(u64::from(seconds)));
        }

        let http = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` plus `query`.
    pub fn url(&self, path: &ApiPath, query: Query<'_>) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path.fixed);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if let Some(id) = &path.id {
            url.path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl {
                    url: raw.clone(),
                    reason: "base URL cannot have path segments".to_string(),
                })?
                .push(id);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// `GET path?query` decoded as `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: impl Into<ApiPath>,
        query: Query<'_>,
    ) -> Result<T, ApiError> {
        let path = path.into();
        let url = self.url(&path, query)?;
        let label = path.to_string();
        let body = self.execute(&label, self.http.get(url)).await?;
        decode(&label, &body)
    }

    /// Request with an optional JSON body, response decoded as `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: impl Into<ApiPath>,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let path = path.into();
        let bytes = self.send_raw(method, &path, body).await?;
        decode(&path.to_string(), &bytes)
    }

    /// Request whose response body is not needed.
    pub async fn send_unit(
        &self,
        method: Method,
        path: impl Into<ApiPath>,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.send_raw(method, &path.into(), body).await.map(|_| ())
    }

    async fn send_raw(&self, method: Method, path: &ApiPath, body: Option<Value>) -> Result<Vec<u8>, ApiError> {
        let url = self.url(path, &[])?;
        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.execute(&path.to_string(), builder).await
    }

    async fn execute(&self, path: &str, builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        tracing::debug!(path = %path, status = status.as_u16(), bytes = body.len(), "API response");

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let client = client("https://example.com/api/");
        let url = client.url(&"/news".into(), &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/news");
    }

    #[test]
    fn url_appends_query_pairs() {
        let client = client("http://localhost:1234");
        let url = client
            .url(&"/news".into(), &[("limit", "9".to_string()), ("offset", "18".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/news?limit=9&offset=18");
    }

    #[test]
    fn url_encodes_query_values() {
        let client = client("http://localhost:1234");
        let url = client.url(&"/news/search".into(), &[("q", "salud pública".to_string())]).unwrap();
        assert_eq!(url.query(), Some("q=salud+p%C3%BAblica"));
    }

    #[test]
    fn id_segment_is_percent_encoded() {
        let client = client("https://example.com/api");
        let url = client.url(&ApiPath::with_id("/news", "a?b#c/d"), &[]).unwrap();
        assert_eq!(url.path(), "/api/news/a%3Fb%23c%2Fd");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn id_segment_keeps_query_pairs() {
        let client = client("http://localhost:1234");
        let url = client
            .url(&ApiPath::with_id("/comment/replies", "c1"), &[("x", "1".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/comment/replies/c1?x=1");
    }
}
