//! Navigation guards over the session snapshot. No state of their own.

use crate::features::auth::AuthState;

use super::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Decide whether `route` may be entered.
///
/// - `/user` needs an active session, else home.
/// - `/sign-up` is for guests only, else the profile.
/// - `/admin` needs an admin session, else home.
///
/// A session still being detected counts as no session.
pub fn guard(route: &Route, auth: &AuthState) -> GuardDecision {
    match route {
        Route::Profile if !auth.is_authenticated() => GuardDecision::Redirect(Route::Home),
        Route::SignUp if auth.is_authenticated() => GuardDecision::Redirect(Route::Profile),
        Route::Admin if !auth.is_admin() => GuardDecision::Redirect(Route::Home),
        _ => GuardDecision::Allow,
    }
}
