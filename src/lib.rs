//! Client for the news portal REST API.
//!
//! The crate keeps one observable store per feature (session, users,
//! news, comments, location, weather), fed by services that call the API
//! and refresh an expired session once before giving up. Everything is
//! owned by [`portal::Portal`]; the `newsdesk` binary renders it as text.

pub mod api;
pub mod cli;
pub mod config;
pub mod features;
pub mod logging;
pub mod portal;
pub mod schema;
pub mod session;
pub mod state;
pub mod view;
