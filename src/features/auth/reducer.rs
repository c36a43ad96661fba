//! Reducer for the session store.

use crate::state::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::{AuthState, SessionStatus};

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::Started { token } => {
                state.latest = state.latest.max(token);
                state.loading = true;
                state.error = None;
            }

            AuthIntent::SessionEstablished { token, session } => {
                // A confirmed session is never stale: the cookie jar already
                // holds it, whichever request answered last.
                state.status = SessionStatus::LoggedIn;
                state.session = Some(session);
                if token >= state.latest {
                    state.loading = false;
                    state.error = None;
                }
            }

            AuthIntent::Failed { token, message } => {
                if token == state.latest {
                    state.loading = false;
                    state.error = Some(message);
                }
                if state.status == SessionStatus::Unknown {
                    state.status = SessionStatus::Guest;
                }
            }

            AuthIntent::SessionLost { token } => {
                state.status = SessionStatus::Guest;
                state.session = None;
                if token == state.latest {
                    state.loading = false;
                }
            }

            AuthIntent::LoggedOut => {
                state.status = SessionStatus::Guest;
                state.session = None;
                state.loading = false;
                state.error = None;
            }

            AuthIntent::CommandStarted => state.result.start(),
            AuthIntent::CommandSucceeded => state.result.succeed(),
            AuthIntent::CommandFailed { message } => state.result.fail(message),
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Role, Session};

    fn session(name: &str) -> Session {
        Session {
            username: name.into(),
            role: Role::User,
        }
    }

    fn logged_in() -> AuthState {
        AuthReducer::reduce(
            AuthState::default(),
            AuthIntent::SessionEstablished {
                token: 1,
                session: session("ana"),
            },
        )
    }

    #[test]
    fn started_sets_loading_and_clears_error() {
        let state = AuthState {
            error: Some("old".into()),
            ..AuthState::default()
        };
        let state = AuthReducer::reduce(state, AuthIntent::Started { token: 1 });
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn established_session_logs_in() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::Started { token: 1 });
        let state = AuthReducer::reduce(
            state,
            AuthIntent::SessionEstablished {
                token: 1,
                session: session("ana"),
            },
        );
        assert!(state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(state.username(), Some("ana"));
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let state = AuthReducer::reduce(logged_in(), AuthIntent::Started { token: 2 });
        let state = AuthReducer::reduce(
            state,
            AuthIntent::Failed {
                token: 2,
                message: "Invalid credentials".into(),
            },
        );
        assert!(state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn failure_during_detection_settles_guest() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::Started { token: 1 });
        let state = AuthReducer::reduce(
            state,
            AuthIntent::Failed {
                token: 1,
                message: "nope".into(),
            },
        );
        assert_eq!(state.status, SessionStatus::Guest);
    }

    #[test]
    fn stale_failure_does_not_clear_loading() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::Started { token: 1 });
        let state = AuthReducer::reduce(state, AuthIntent::Started { token: 2 });
        let state = AuthReducer::reduce(
            state,
            AuthIntent::Failed {
                token: 1,
                message: "old".into(),
            },
        );
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn lost_session_becomes_guest() {
        let state = AuthReducer::reduce(logged_in(), AuthIntent::SessionLost { token: 2 });
        assert_eq!(state.status, SessionStatus::Guest);
        assert!(state.session.is_none());
    }

    #[test]
    fn logout_clears_session() {
        let state = AuthReducer::reduce(logged_in(), AuthIntent::LoggedOut);
        assert!(!state.is_authenticated());
        assert!(state.session.is_none());
    }

    #[test]
    fn command_outcome_is_tracked_separately() {
        let state = AuthReducer::reduce(logged_in(), AuthIntent::CommandStarted);
        assert!(state.result.loading);
        assert!(!state.loading);
        let state = AuthReducer::reduce(
            state,
            AuthIntent::CommandFailed {
                message: "Wrong password".into(),
            },
        );
        assert_eq!(state.result.error.as_deref(), Some("Wrong password"));
        assert!(state.is_authenticated());
    }
}
