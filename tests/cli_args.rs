//! Tests for CLI argument parsing and end-to-end runs of the binary.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{free_port, page_json};
use std::process::{Command, Output};

fn newsdesk_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_newsdesk"));
    cmd.env_remove("NEWSDESK_API_URL")
        .env_remove("NEWSDESK_PASSWORD")
        .env_remove("NEWSDESK_LOG");
    cmd
}

/// Run against `base_url` with a config file that does not exist.
fn run_against(base_url: &str, args: &[&str]) -> Output {
    let temp_dir = tempfile::TempDir::new().unwrap();
    newsdesk_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("--api-url")
        .arg(base_url)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_shows_api_url_option() {
    let output = newsdesk_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--api-url"));
    assert!(stdout.contains("news"));
    assert!(stdout.contains("admin"));
}

#[test]
fn test_invalid_category_is_rejected() {
    let output = newsdesk_cmd()
        .args(["category", "politics"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown category 'politics'"), "stderr: {}", stderr);
}

#[test]
fn test_missing_subcommand_shows_usage() {
    let output = newsdesk_cmd().output().expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_guest_route_to_profile_redirects_home() {
    let unreachable = format!("http://127.0.0.1:{}", free_port());
    let output = run_against(&unreachable, &["route", "/user"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("/user redirected to /"), "stdout: {}", stdout);
}

#[test]
fn test_invalid_api_url_fails_before_any_request() {
    let output = run_against("ftp://example.com", &["news"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http or https"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_news_page_is_printed() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/user/", MockResponse::error(401, "No token"))
        .await;
    mock.on("POST", "/auth/refresh", MockResponse::error(401, "No token"))
        .await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["a1", "a2"], 11)))
        .await;

    let base_url = mock.base_url();
    let output = tokio::task::spawn_blocking(move || run_against(&base_url, &["news", "--page", "2"]))
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Title a1"));
    assert!(stdout.contains("Title a2"));

    let request = &mock.requests_to("GET", "/news").await[0];
    assert_eq!(request.query.as_deref(), Some("limit=9&offset=9"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_page_zero_is_rejected_before_any_request() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["a1"], 1)))
        .await;

    let base_url = mock.base_url();
    let output = tokio::task::spawn_blocking(move || run_against(&base_url, &["news", "--page", "0"]))
        .await
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--page"), "stderr: {}", stderr);
    assert!(mock.captured_requests().await.is_empty());
}
