//! State for the authenticated session.

use crate::schema::{Role, Session};
use crate::state::mvi::UiState;
use crate::state::{CommandStatus, RequestToken};

/// Whether the caller is known to be logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Detection has not finished yet.
    #[default]
    Unknown,
    LoggedIn,
    Guest,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub status: SessionStatus,
    pub session: Option<Session>,
    /// A login, registration, refresh or logout is in flight.
    pub loading: bool,
    pub error: Option<String>,
    /// Outcome of the last password or role change.
    pub result: CommandStatus,
    pub(crate) latest: RequestToken,
}

impl UiState for AuthState {}

impl AuthState {
    /// A session is active only once it is confirmed. `Unknown` is not.
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::LoggedIn && self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role() == Some(Role::Admin)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    /// Detection has settled one way or the other.
    pub fn is_settled(&self) -> bool {
        self.status != SessionStatus::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in(role: Role) -> AuthState {
        AuthState {
            status: SessionStatus::LoggedIn,
            session: Some(Session {
                username: "ana".into(),
                role,
            }),
            ..AuthState::default()
        }
    }

    #[test]
    fn unknown_is_default_and_not_authenticated() {
        let state = AuthState::default();
        assert_eq!(state.status, SessionStatus::Unknown);
        assert!(!state.is_authenticated());
        assert!(!state.is_settled());
    }

    #[test]
    fn admin_requires_active_session() {
        assert!(logged_in(Role::Admin).is_admin());
        assert!(!logged_in(Role::User).is_admin());

        let mut stale = logged_in(Role::Admin);
        stale.status = SessionStatus::Guest;
        assert!(!stale.is_admin());
    }

    #[test]
    fn username_comes_from_session() {
        assert_eq!(logged_in(Role::User).username(), Some("ana"));
        assert_eq!(AuthState::default().username(), None);
    }
}
