//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use newsdesk::config::Config;
use newsdesk::portal::Portal;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

use mock_backend::MockBackend;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file pointing at `base_url`.
pub fn temp_config(base_url: &str, extra: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[api]
base_url = "{}"
connect_timeout_seconds = 2

{}
"#,
        base_url, extra
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config aimed at the mock server, everything else at defaults.
pub fn mock_config(mock: &MockBackend) -> Config {
    let mut config = Config::default();
    config.api.base_url = mock.base_url();
    config
}

/// A portal talking to the mock server.
pub fn portal_for(mock: &MockBackend) -> Portal {
    Portal::new(mock_config(mock)).expect("Failed to build portal")
}

// -- Fixtures -----------------------------------------------------------------

pub fn news_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Title {}", id),
        "snippet": "Snippet",
        "newsUrl": format!("https://example.com/{}", id),
        "publisher": "Example",
        "timestamp": "1700000000000",
        "image_url": null,
        "hasSubnews": false,
        "likes": 0
    })
}

pub fn page_json(ids: &[&str], total: u64) -> Value {
    json!({
        "data": ids.iter().map(|id| news_json(id)).collect::<Vec<_>>(),
        "total": total
    })
}

pub fn user_json(id: &str, username: &str, role: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username),
        "name": "Maria",
        "lastname": "Lopez",
        "birthday": "1990-04-12",
        "role": role,
        "subscription": false,
        "is_active": true
    })
}

pub fn session_json(username: &str, role: &str) -> Value {
    json!({ "username": username, "role": role })
}

pub fn comment_json(id: &str, username: &str, parent: Option<&str>, replies: u64) -> Value {
    json!({
        "id": id,
        "news_id": "n1",
        "user_id": format!("u-{}", username),
        "parent_comment_id": parent,
        "content": format!("comment {}", id),
        "likes": 0,
        "replies": replies,
        "username": username
    })
}
