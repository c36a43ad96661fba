//! Intents for the session store.

use crate::schema::Session;
use crate::state::mvi::Intent;
use crate::state::RequestToken;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// Login, registration, refresh or logout sent.
    Started { token: RequestToken },

    /// The server confirmed a session (login, registration, refresh or
    /// a successful profile load during detection).
    SessionEstablished {
        token: RequestToken,
        session: Session,
    },

    /// Login or registration was rejected. Any current session stays.
    Failed {
        token: RequestToken,
        message: String,
    },

    /// Refresh failed: the session cannot be recovered.
    SessionLost { token: RequestToken },

    /// The session ended (logout, or the account was deleted).
    LoggedOut,

    /// Password or role change sent.
    CommandStarted,

    CommandSucceeded,

    CommandFailed { message: String },
}

impl Intent for AuthIntent {}
