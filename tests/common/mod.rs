// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use mcrun_stats::config::Config;
use mcrun_stats::models::GearLimits;
use mcrun_stats::routes::create_router;
use mcrun_stats::services::StravaClient;
use mcrun_stats::AppState;
use std::sync::Arc;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "test_access_token";

/// Strava client pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> StravaClient {
    StravaClient::new(&Config::test_default(&server.uri()))
}

/// Create a test app talking to a mock Strava.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(server: &MockServer, gear_limits: GearLimits) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default(&server.uri());
    let strava = StravaClient::new(&config);

    let state = Arc::new(AppState {
        config,
        gear_limits,
        strava,
    });

    (create_router(state.clone()), state)
}

/// Token endpoint that always hands out [`ACCESS_TOKEN`].
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=test_refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "access_token": ACCESS_TOKEN,
            "expires_at": 1_900_000_000,
            "refresh_token": "test_refresh_token"
        })))
        .mount(server)
        .await;
}

/// Serve `pages` as activity pages 1..=n, followed by an empty page.
/// Each page is expected to be requested exactly once.
#[allow(dead_code)]
pub async fn mount_activity_pages(server: &MockServer, pages: Vec<Vec<serde_json::Value>>) {
    let last = pages.len() + 1;
    for (i, page) in pages.into_iter().enumerate() {
        mount_page(server, i + 1, serde_json::Value::Array(page)).await;
    }
    mount_page(server, last, serde_json::json!([])).await;
}

#[allow(dead_code)]
async fn mount_page(server: &MockServer, page: usize, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Gear endpoint for one ID, expected to be hit exactly once.
#[allow(dead_code)]
pub async fn mount_gear(server: &MockServer, gear_id: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v3/gear/{}", gear_id)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Strava summary activity JSON.
#[allow(dead_code)]
pub fn activity_json(
    activity_type: &str,
    gear_id: Option<&str>,
    distance: f64,
    moving_time: u64,
    start_date_local: &str,
    name: &str,
) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": name,
        "type": activity_type,
        "sport_type": activity_type,
        "distance": distance,
        "moving_time": moving_time,
        "start_date_local": start_date_local,
        "gear_id": gear_id
    })
}
