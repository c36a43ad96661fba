mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::portal_for;
use serde_json::json;

fn location_reply() -> MockResponse {
    MockResponse::value(json!({
        "location": {
            "location": { "latitude": 40.4168, "longitude": -3.7038 },
            "city": "Madrid",
            "country": "ES"
        }
    }))
}

#[tokio::test]
async fn test_weather_waits_for_location() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/location", location_reply()).await;
    mock.on(
        "GET",
        "/location/weather",
        MockResponse::value(json!({
            "weather": { "temperature": 21.5, "description": "cielo claro", "city": "Madrid" }
        })),
    )
    .await;

    let portal = portal_for(&mock);
    portal.load_weather().await;

    assert_eq!(mock.calls().await, vec!["GET /location", "GET /location/weather"]);
    let request = &mock.requests_to("GET", "/location/weather").await[0];
    assert_eq!(
        request.query.as_deref(),
        Some("latitude=40.4168&longitude=-3.7038&lang=ES")
    );

    let location = portal.location().snapshot();
    assert_eq!(location.location.data.unwrap().city.as_deref(), Some("Madrid"));

    let weather = portal.weather().snapshot();
    assert_eq!(weather.weather.data.unwrap().temperature, 21.5);
    assert_eq!(weather.coordinates.map(|c| c.latitude), Some(40.4168));
}

#[tokio::test]
async fn test_known_location_is_not_fetched_again() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/location", location_reply()).await;

    let portal = portal_for(&mock);
    portal.load_weather().await;
    portal.load_weather().await;

    assert_eq!(mock.requests_to("GET", "/location").await.len(), 1);
    assert_eq!(mock.requests_to("GET", "/location/weather").await.len(), 2);
}

#[tokio::test]
async fn test_failed_location_skips_weather() {
    let mock = MockBackend::start().await;
    mock.on("GET", "/location", MockResponse::error(503, "Geo service down"))
        .await;

    let portal = portal_for(&mock);
    portal.load_weather().await;

    assert_eq!(mock.calls().await, vec!["GET /location"]);
    assert_eq!(
        portal.location().snapshot().location.error.as_deref(),
        Some("Geo service down")
    );
    assert!(portal.weather().snapshot().weather.data.is_none());
}
