// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::Path;
use strava_gist_stats::config::{Config, MeasurementSystem};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointing every endpoint at `server` and the cache at `cache_path`.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, cache_path: &Path, units: MeasurementSystem) -> Config {
    Config {
        github_api_base: server.uri(),
        strava_api_base: format!("{}/api/v3", server.uri()),
        strava_oauth_url: format!("{}/oauth/token", server.uri()),
        auth_cache_path: cache_path.to_path_buf(),
        units,
        ..Config::test_default()
    }
}

/// Mount a token endpoint returning the given pair.
#[allow(dead_code)]
pub async fn mount_token_refresh(server: &MockServer, access: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "access_token": access,
            "refresh_token": refresh,
            "expires_at": 1_900_000_000i64,
            "expires_in": 21600,
        })))
        .mount(server)
        .await;
}

/// Stats payload with year-to-date and recent totals for all disciplines.
#[allow(dead_code)]
pub fn stats_payload() -> serde_json::Value {
    serde_json::json!({
        "biggest_ride_distance": 80000.0,
        "recent_run_totals": {"count": 2, "distance": 8000.0, "moving_time": 2400,
                              "elapsed_time": 2500, "elevation_gain": 40.0, "achievement_count": 3},
        "recent_swim_totals": {"count": 0, "distance": 0.0, "moving_time": 0,
                               "elapsed_time": 0, "elevation_gain": 0.0, "achievement_count": 0},
        "recent_ride_totals": {"count": 1, "distance": 40000.0, "moving_time": 5400,
                               "elapsed_time": 6000, "elevation_gain": 300.0, "achievement_count": 4},
        "ytd_run_totals": {"count": 10, "distance": 10000.0, "moving_time": 3600},
        "ytd_swim_totals": {"count": 0, "distance": 0.0, "moving_time": 0},
        "ytd_ride_totals": {"count": 5, "distance": 30000.0, "moving_time": 3600},
        "all_run_totals": {"count": 100, "distance": 500000.0, "moving_time": 180000},
    })
}
