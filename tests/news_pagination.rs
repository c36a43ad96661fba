mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{news_json, page_json, portal_for};
use newsdesk::features::news::NewsList;
use newsdesk::schema::Category;
use serde_json::json;

#[tokio::test]
async fn test_offset_maps_to_page_key_and_keeps_other_pages() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["a1", "a2"], 30)))
        .await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["b1"], 30)))
        .await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["c1", "c2", "c3"], 30)))
        .await;

    let portal = portal_for(&mock);
    let news = portal.news();
    news.load_page(NewsList::Latest, 9, 0).await;
    news.load_page(NewsList::Latest, 9, 9).await;
    news.load_page(NewsList::Latest, 9, 18).await;

    let requests = mock.requests_to("GET", "/news").await;
    assert_eq!(requests[2].query.as_deref(), Some("limit=9&offset=18"));

    let latest = news.snapshot().latest;
    assert_eq!(latest.pages.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(latest.page(3).unwrap().len(), 3);
    assert_eq!(latest.page(1).unwrap()[0].id, "a1");
    assert_eq!(latest.page(2).unwrap()[0].id, "b1");
    assert_eq!(latest.total, 30);
    assert!(!latest.loading);
}

#[tokio::test]
async fn test_offset_zero_replaces_cached_pages() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["old"], 20)))
        .await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["p2"], 20)))
        .await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["new"], 21)))
        .await;

    let portal = portal_for(&mock);
    let news = portal.news();
    news.load_page(NewsList::Latest, 9, 0).await;
    news.load_page(NewsList::Latest, 9, 9).await;
    news.load_page(NewsList::Latest, 9, 0).await;

    let latest = portal.news().snapshot().latest;
    assert_eq!(latest.pages.len(), 1);
    assert_eq!(latest.page(1).unwrap()[0].id, "new");
    assert_eq!(latest.total, 21);
}

#[tokio::test]
async fn test_ensure_page_uses_cache() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["a"], 1)))
        .await;

    let portal = portal_for(&mock);
    let news = portal.news();
    news.ensure_page(NewsList::Latest, 1, 9).await;
    news.ensure_page(NewsList::Latest, 1, 9).await;

    assert_eq!(mock.requests_to("GET", "/news").await.len(), 1);
}

#[tokio::test]
async fn test_go_to_page_stays_within_known_total() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["a1"], 11)))
        .await;
    mock.on("GET", "/news", MockResponse::value(page_json(&["b1"], 11)))
        .await;

    let portal = portal_for(&mock);
    assert_eq!(portal.go_to_page(NewsList::Latest, 0).await, None);
    assert_eq!(portal.go_to_page(NewsList::Latest, u32::MAX).await, None);
    assert!(mock.captured_requests().await.is_empty());

    assert_eq!(portal.go_to_page(NewsList::Latest, 1).await, Some(1));
    assert_eq!(portal.go_to_page(NewsList::Latest, 3).await, None);
    assert_eq!(portal.next_page(NewsList::Latest, 1).await, Some(2));
    assert_eq!(portal.next_page(NewsList::Latest, 2).await, None);
    assert_eq!(portal.previous_page(NewsList::Latest, 2).await, Some(1));
    assert_eq!(portal.previous_page(NewsList::Latest, 1).await, None);

    let requests = mock.requests_to("GET", "/news").await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].query.as_deref(), Some("limit=9&offset=9"));
    let latest = portal.news().snapshot().latest;
    assert_eq!(latest.page(2).unwrap()[0].id, "b1");
}

#[tokio::test]
async fn test_article_id_is_one_path_segment() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/news/a%3Fb", MockResponse::value(news_json("a?b")))
        .await;

    let portal = portal_for(&mock);
    portal.news().load_article("a?b").await;

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/news/a%3Fb");
    assert_eq!(requests[0].query, None);
    let article = portal.news().snapshot().article;
    assert_eq!(article.data.map(|news| news.id), Some("a?b".to_string()));
}

#[tokio::test]
async fn test_category_switch_drops_previous_category() {
    let mock = MockBackend::start().await;
    mock.on(
        "GET",
        "/news/category/health",
        MockResponse::value(page_json(&["h1"], 1)),
    )
    .await;
    mock.on(
        "GET",
        "/news/category/sport",
        MockResponse::value(page_json(&["s1", "s2"], 2)),
    )
    .await;

    let portal = portal_for(&mock);
    portal.go_to_page(NewsList::Category(Category::Health), 1).await;
    portal.go_to_page(NewsList::Category(Category::Sport), 1).await;

    let state = portal.news().snapshot();
    assert_eq!(state.current_category, Some(Category::Sport));
    assert_eq!(state.category.page(1).unwrap()[0].id, "s1");
    assert!(!state.has_page(NewsList::Category(Category::Health), 1));
    assert!(state.has_page(NewsList::Category(Category::Sport), 1));
    assert_eq!(
        mock.requests_to("GET", "/news/category/sport").await[0]
            .query
            .as_deref(),
        Some("limit=9&offset=0")
    );
}

#[tokio::test]
async fn test_search_encodes_query_and_stores_results() {
    let mock = MockBackend::start().await;
    mock.on(
        "GET",
        "/news/search",
        MockResponse::value(json!([news_json("x"), news_json("y")])),
    )
    .await;

    let portal = portal_for(&mock);
    portal.news().search("  salud pública ").await;

    let requests = mock.requests_to("GET", "/news/search").await;
    assert_eq!(requests[0].query.as_deref(), Some("q=salud+p%C3%BAblica"));

    let state = portal.news().snapshot();
    assert_eq!(state.search_query.as_deref(), Some("salud pública"));
    assert_eq!(state.search.data.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_blank_search_sends_nothing() {
    let mock = MockBackend::start().await;
    let portal = portal_for(&mock);

    portal.news().search("   ").await;

    assert!(mock.captured_requests().await.is_empty());
    assert_eq!(
        portal.news().snapshot().search.error.as_deref(),
        Some("Search text is required")
    );
}

#[tokio::test]
async fn test_toggle_status_reloads_inactive_page() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/news/inactive", MockResponse::value(page_json(&["i1", "i2"], 12)))
        .await;
    mock.on("POST", "/news/i1", MockResponse::json("true")).await;
    mock.on("GET", "/news/inactive", MockResponse::value(page_json(&["i2"], 11)))
        .await;

    let portal = portal_for(&mock);
    portal.go_to_page(NewsList::Inactive, 2).await;
    assert!(portal.toggle_news_status("i1", 2).await);

    assert_eq!(
        mock.calls().await,
        vec!["GET /news/inactive", "POST /news/i1", "GET /news/inactive"]
    );
    let reload = &mock.requests_to("GET", "/news/inactive").await[1];
    assert_eq!(reload.query.as_deref(), Some("limit=10&offset=10"));

    let state = portal.news().snapshot();
    assert!(state.result.succeeded);
    assert_eq!(state.inactive.pages.keys().copied().collect::<Vec<_>>(), vec![2]);
    assert_eq!(state.inactive.total, 11);
}

#[tokio::test]
async fn test_clean_news_reports_server_summary() {
    let mock = MockBackend::start().await;
    mock.on(
        "DELETE",
        "/news/clean",
        MockResponse::value(json!({ "message": "Deleted 4 news" })),
    )
    .await;

    let portal = portal_for(&mock);
    assert!(portal.news().clean("secret1").await);

    let request = &mock.requests_to("DELETE", "/news/clean").await[0];
    assert_eq!(request.body_json(), json!({ "password": "secret1" }));
    assert_eq!(
        portal.news().snapshot().last_message.as_deref(),
        Some("Deleted 4 news")
    );
}

#[tokio::test]
async fn test_clean_news_with_short_password_sends_nothing() {
    let mock = MockBackend::start().await;
    let portal = portal_for(&mock);

    assert!(!portal.news().clean("abc").await);

    assert!(mock.captured_requests().await.is_empty());
    assert_eq!(
        portal.news().snapshot().result.error.as_deref(),
        Some("password must be at least 6 characters")
    );
}
