use cookieless_analytics::beacon::BeaconClient;
use cookieless_analytics::configuration::BeaconSettings;
use cookieless_analytics::errors::BeaconError;
use cookieless_analytics::models::{ScreenResolution, StatsResponse};
use cookieless_analytics::stats::STATS_ERROR_HTML;

use crate::helpers::spawn_app;

fn beacon_settings(collector_url: String) -> BeaconSettings {
    BeaconSettings {
        collector_url,
        screen: ScreenResolution {
            width: 1920,
            height: 1080,
        },
        user_agent: Some("Mozilla/5.0 (X11; Linux x86_64) test-agent".to_string()),
        render_stats: true,
    }
}

#[tokio::test]
async fn a_beacon_run_registers_a_visit() {
    // arrange
    let app = spawn_app().await;
    let settings = beacon_settings(app.address.clone());
    let client = BeaconClient::new(settings.collector_url.clone());

    // act
    let payload = BeaconClient::collect(&settings);
    client.send(&payload).await.expect("Failed to send payload.");

    // assert
    let stats: StatsResponse = app
        .get_stats()
        .await
        .json()
        .await
        .expect("Failed to parse stats.");
    assert_eq!(stats.total_visitors, 1);
    assert_eq!(stats.unique_visitors, 1);
}

#[tokio::test]
async fn fetch_stats_round_trips_the_summary() {
    // arrange
    let app = spawn_app().await;
    let settings = beacon_settings(app.address.clone());
    let client = BeaconClient::new(settings.collector_url.clone());
    client
        .send(&BeaconClient::collect(&settings))
        .await
        .expect("Failed to send payload.");

    // act
    let stats = client.fetch_stats().await.expect("Failed to fetch stats.");

    // assert
    assert_eq!(stats.total_visitors, 1);
    assert_eq!(stats.period_stats["today"].total, 1);
}

#[tokio::test]
async fn rendered_stats_contain_the_series_tables() {
    // arrange
    let app = spawn_app().await;
    let settings = beacon_settings(app.address.clone());
    let client = BeaconClient::new(settings.collector_url.clone());
    client
        .send(&BeaconClient::collect(&settings))
        .await
        .expect("Failed to send payload.");

    // act
    let fragment = client.fetch_and_render_stats().await;

    // assert
    assert!(fragment.contains("Total visitors: <strong>1</strong>"));
    assert!(fragment.contains("Daily Visitors"));
    assert!(fragment.contains("Monthly Visitors"));
}

// a stand-in collector whose stats body is not JSON, for exercising the
// malformed-response path without touching the real routes
async fn spawn_non_json_collector() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind port.");
    let port = listener.local_addr().unwrap().port();

    let server = actix_web::HttpServer::new(|| {
        actix_web::App::new().route(
            "/get",
            actix_web::web::get()
                .to(|| async { actix_web::HttpResponse::Ok().body("<html>not json</html>") }),
        )
    })
    .listen(listener)
    .expect("Failed to listen.")
    .run();
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn a_non_json_stats_body_surfaces_as_a_malformed_response() {
    // arrange
    let address = spawn_non_json_collector().await;
    let client = BeaconClient::new(address);

    // act
    let outcome = client.fetch_stats().await;

    // assert
    assert!(matches!(outcome, Err(BeaconError::MalformedResponse(_))));
}

#[tokio::test]
async fn a_non_json_stats_body_renders_the_error_fragment() {
    // arrange
    let address = spawn_non_json_collector().await;
    let client = BeaconClient::new(address);

    // act
    let fragment = client.fetch_and_render_stats().await;

    // assert
    assert_eq!(fragment, STATS_ERROR_HTML);
    assert!(!fragment.contains("<table"));
}

#[tokio::test]
async fn an_unreachable_collector_renders_the_error_fragment() {
    // arrange: nothing is listening on port 1
    let client = BeaconClient::new("http://127.0.0.1:1".to_string());

    // act
    let fragment = client.fetch_and_render_stats().await;

    // assert
    assert_eq!(fragment, STATS_ERROR_HTML);
    assert!(!fragment.contains("<table"));
}

#[tokio::test]
async fn a_send_against_an_unreachable_collector_surfaces_an_error() {
    // arrange
    let settings = beacon_settings("http://127.0.0.1:1".to_string());
    let client = BeaconClient::new(settings.collector_url.clone());

    // act
    let outcome = client.send(&BeaconClient::collect(&settings)).await;

    // assert
    assert!(outcome.is_err());
}
