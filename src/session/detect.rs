use crate::features::auth::{AuthService, SessionStatus};
use crate::features::user::UserService;

/// One-shot startup detection: profile, then refresh, then guest.
///
/// There is no periodic re-validation. An expired session is discovered
/// later, when an authenticated call fails and is retried.
pub async fn detect_session(auth: &AuthService, users: &UserService) -> SessionStatus {
    if let Some(session) = users.probe_profile().await {
        tracing::info!(username = %session.username, "Existing session found");
        auth.confirm_session(session);
        return SessionStatus::LoggedIn;
    }

    if auth.refresh().await {
        return SessionStatus::LoggedIn;
    }

    tracing::info!("No session, continuing as guest");
    auth.end_session();
    SessionStatus::Guest
}
