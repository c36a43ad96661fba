use async_trait::async_trait;
use chrono::Utc;

use crate::api::{with_auth_retry, AuthApi, SessionRefresher};
use crate::schema::validate::{validate_credentials, validate_password_change, validate_user_id, validate_user_input};
use crate::schema::{Credentials, Role, Session, UserInput};
use crate::state::{RequestToken, Store};

use super::intent::AuthIntent;
use super::reducer::AuthReducer;
use super::state::AuthState;

/// Session lifecycle commands backed by the `/auth/*` endpoints.
pub struct AuthService {
    api: AuthApi,
    store: Store<AuthReducer>,
}

impl AuthService {
    pub fn new(api: AuthApi) -> Self {
        Self {
            api,
            store: Store::new(),
        }
    }

    pub fn store(&self) -> &Store<AuthReducer> {
        &self.store
    }

    pub fn snapshot(&self) -> AuthState {
        self.store.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read(AuthState::is_authenticated)
    }

    /// Validate and submit a registration. The new account is logged in.
    pub async fn register(&self, input: &UserInput) -> bool {
        let token = self.store.next_token();
        self.store.dispatch(AuthIntent::Started { token });

        if let Err(err) = validate_user_input(input, Utc::now().date_naive()) {
            self.fail(token, err.to_string());
            return false;
        }

        match self.api.register(input).await {
            Ok(session) => {
                tracing::info!(username = %session.username, "Registered new account");
                self.establish(token, session);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "Registration rejected");
                self.fail(token, err.display_message("Error registering user"));
                false
            }
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> bool {
        let token = self.store.next_token();
        self.store.dispatch(AuthIntent::Started { token });

        if let Err(err) = validate_credentials(credentials) {
            self.fail(token, err.to_string());
            return false;
        }

        match self.api.login(credentials).await {
            Ok(session) => {
                tracing::info!(username = %session.username, role = %session.role, "Logged in");
                self.establish(token, session);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "Login rejected");
                self.fail(token, err.display_message("Error logging in"));
                false
            }
        }
    }

    /// End the session on the server. The local session is cleared either way.
    pub async fn logout(&self) -> bool {
        let result = self.api.logout().await;
        self.store.dispatch(AuthIntent::LoggedOut);
        match result {
            Ok(()) => {
                tracing::info!("Logged out");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Logout request failed, session dropped locally");
                false
            }
        }
    }

    /// Renew the session cookie. On failure the session is dropped.
    pub async fn refresh(&self) -> bool {
        let token = self.store.next_token();
        self.store.dispatch(AuthIntent::Started { token });

        match self.api.refresh().await {
            Ok(session) => {
                tracing::info!(username = %session.username, "Session refreshed");
                self.establish(token, session);
                true
            }
            Err(err) => {
                tracing::info!(error = %err, "Session refresh failed");
                self.store.dispatch(AuthIntent::SessionLost { token });
                false
            }
        }
    }

    /// Record a session confirmed elsewhere (profile load at startup).
    pub fn confirm_session(&self, session: Session) {
        let token = self.store.next_token();
        self.establish(token, session);
    }

    /// Drop the local session without talking to the server.
    pub fn end_session(&self) {
        self.store.dispatch(AuthIntent::LoggedOut);
    }

    pub async fn change_password(&self, current: &str, new: &str, confirmation: &str) -> bool {
        self.store.dispatch(AuthIntent::CommandStarted);

        if let Err(err) = validate_password_change(current, new, confirmation) {
            self.store.dispatch(AuthIntent::CommandFailed {
                message: err.to_string(),
            });
            return false;
        }

        let result = with_auth_retry(self, || self.api.change_password(current, new)).await;
        self.finish_command(result.map_err(|e| e.display_message("Error changing password")))
    }

    pub async fn change_role(&self, user_id: &str, role: Role) -> bool {
        self.store.dispatch(AuthIntent::CommandStarted);

        if let Err(err) = validate_user_id(user_id) {
            self.store.dispatch(AuthIntent::CommandFailed {
                message: err.to_string(),
            });
            return false;
        }

        let result = with_auth_retry(self, || self.api.change_role(user_id, role)).await;
        self.finish_command(result.map_err(|e| e.display_message("Error changing role")))
    }

    fn establish(&self, token: RequestToken, session: Session) {
        self.store
            .dispatch(AuthIntent::SessionEstablished { token, session });
    }

    fn fail(&self, token: RequestToken, message: String) {
        self.store.dispatch(AuthIntent::Failed { token, message });
    }

    fn finish_command(&self, result: Result<(), String>) -> bool {
        match result {
            Ok(()) => {
                self.store.dispatch(AuthIntent::CommandSucceeded);
                true
            }
            Err(message) => {
                self.store.dispatch(AuthIntent::CommandFailed { message });
                false
            }
        }
    }
}

#[async_trait]
impl SessionRefresher for AuthService {
    async fn refresh_session(&self) -> bool {
        self.refresh().await
    }
}
