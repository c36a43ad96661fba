use reqwest::Method;
use serde_json::json;

use crate::schema::{Credentials, Role, Session, UserInput};

use super::client::ApiClient;
use super::error::ApiError;

/// `/auth/*` endpoints. All of them set or clear the session cookie.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, user: &UserInput) -> Result<Session, ApiError> {
        self.client
            .send(Method::POST, "/auth/register", Some(json!({ "user": user })))
            .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.client
            .send(Method::POST, "/auth/login", Some(json!({ "auth": credentials })))
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::POST, "/auth/logout", Some(json!({})))
            .await
    }

    pub async fn refresh(&self) -> Result<Session, ApiError> {
        self.client
            .send(Method::POST, "/auth/refresh", Some(json!({})))
            .await
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let body = json!({ "oldPass": old_password, "newPass": new_password });
        self.client
            .send_unit(Method::POST, "/auth/password", Some(body))
            .await
    }

    pub async fn change_role(&self, user_id: &str, role: Role) -> Result<(), ApiError> {
        let body = json!({ "id": user_id, "role": role });
        self.client.send_unit(Method::POST, "/auth/role", Some(body)).await
    }
}
