//! HTTP behaviour against a local mock server

use std::time::Duration;

use serde_json::json;
use weather_widget::{
    api::WeatherClient,
    config::ClientConfig,
    error::FetchError,
    messages::error_message,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WeatherClient {
    let config = ClientConfig::new("test-key")
        .with_weather_url(format!("{}/data/2.5/weather", server.uri()))
        .with_geo_url(format!("{}/json/", server.uri()));
    WeatherClient::new(config).unwrap()
}

#[tokio::test]
async fn test_weather_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Ankara"))
        .and(query_param("appid", "test-key"))
        .and(query_param("lang", "tr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cod": 200,
            "main": {"temp": 295.15},
            "weather": [{"id": 800, "description": "clear sky"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server).fetch_weather("Ankara").await.unwrap();

    assert_eq!(report.temperature_label(), "22°C");
    assert_eq!(report.condition_id, 800);
    assert_eq!(report.description, "clear sky");
}

#[tokio::test]
async fn test_weather_encodes_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cod": 200,
            "main": {"temp": 280.0},
            "weather": [{"id": 801, "description": "az bulutlu"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server).fetch_weather("New York").await.unwrap();
    assert_eq!(report.condition_id, 801);
}

#[tokio::test]
async fn test_weather_404_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_weather("Atlantis")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { code: 404, .. }));
    assert_eq!(error_message(&err), "Not found:\nCity not found");
}

#[tokio::test]
async fn test_weather_unmapped_status_keeps_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_weather("Ankara").await.unwrap_err();

    let FetchError::Status { code, detail } = &err else {
        panic!("expected status error, got {err:?}");
    };
    assert_eq!(*code, 429);
    assert!(!detail.contains("test-key"), "credential leaked: {detail}");
    assert!(error_message(&err).starts_with("HTTP error occurred:\n"));
}

#[tokio::test]
async fn test_weather_business_error_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_weather("").await.unwrap_err();

    assert_eq!(err, FetchError::CityNotFound);
}

#[tokio::test]
async fn test_weather_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({"cod": 200})),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new("test-key")
        .with_weather_url(format!("{}/data/2.5/weather", server.uri()))
        .with_timeout(Duration::from_millis(100));
    let client = WeatherClient::new(config).unwrap();

    let err = client.fetch_weather("Ankara").await.unwrap_err();

    assert_eq!(err, FetchError::Timeout);
}

#[tokio::test]
async fn test_weather_redirect_loop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{}/data/2.5/weather", server.uri())),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_weather("Ankara").await.unwrap_err();

    assert_eq!(err, FetchError::TooManyRedirects);
}

#[tokio::test]
async fn test_weather_connection_refused() {
    // Nothing listens on the discard port
    let config = ClientConfig::new("test-key").with_weather_url("http://127.0.0.1:9/weather");
    let client = WeatherClient::new(config).unwrap();

    let err = client.fetch_weather("Ankara").await.unwrap_err();

    assert_eq!(err, FetchError::Connection);
}

#[tokio::test]
async fn test_locate_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "city": "Ankara"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let city = client_for(&server).locate_city().await.unwrap();

    assert_eq!(city, "Ankara");
}

#[tokio::test]
async fn test_locate_fail_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "fail"})))
        .mount(&server)
        .await;

    let err = client_for(&server).locate_city().await.unwrap_err();

    assert_eq!(err, FetchError::LocationUnavailable);
    assert_eq!(error_message(&err), "Konum alınamadı.");
}

#[tokio::test]
async fn test_locate_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).locate_city().await.unwrap_err();

    assert!(matches!(err, FetchError::Location(_)));
    assert!(error_message(&err).starts_with("Konum hatası:\n"));
}

#[tokio::test]
async fn test_locate_unreachable() {
    let config = ClientConfig::new("test-key").with_geo_url("http://127.0.0.1:9/json/");
    let client = WeatherClient::new(config).unwrap();

    let err = client.locate_city().await.unwrap_err();

    assert!(matches!(err, FetchError::Location(_)));
}
