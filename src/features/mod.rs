//! Per-feature stores and the services that feed them.
//!
//! Each feature follows the same layout: `state` (the snapshot), `intent`
//! (everything that can happen to it), `reducer` (the only place the
//! snapshot changes) and `service` (transport calls that dispatch intents).
//! Features never write to each other's stores; follow-ups across
//! features are driven by [`crate::portal::Portal`].

pub mod auth;
pub mod comment;
pub mod location;
pub mod news;
pub mod user;
pub mod weather;
