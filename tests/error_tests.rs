// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use strava_gist_stats::error::AppError;

#[test]
fn test_is_strava_token_error_matches() {
    let err = AppError::StravaApi(AppError::STRAVA_TOKEN_ERROR.to_string());
    assert!(err.is_strava_token_error());
}

#[test]
fn test_is_strava_token_error_no_match() {
    let err = AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string());
    assert!(!err.is_strava_token_error());

    let err = AppError::StravaApi("HTTP 500 Internal Server Error: ".to_string());
    assert!(!err.is_strava_token_error());

    let err = AppError::GistApi(AppError::STRAVA_TOKEN_ERROR.to_string());
    assert!(!err.is_strava_token_error());
}

#[test]
fn test_refresh_failure_message_is_distinct() {
    let protocol = AppError::CredentialRefresh("missing refresh_token".to_string());
    let transport = AppError::StravaApi("Token refresh request failed: timeout".to_string());

    assert!(protocol.to_string().starts_with("Failed to refresh credentials"));
    assert!(!transport.to_string().starts_with("Failed to refresh credentials"));
}

#[test]
fn test_internal_error_from_anyhow() {
    let err: AppError = anyhow::anyhow!("Failed to serialize credentials: bad").into();
    assert!(matches!(err, AppError::Internal(_)));
    assert_eq!(
        err.to_string(),
        "Internal error: Failed to serialize credentials: bad"
    );
}
