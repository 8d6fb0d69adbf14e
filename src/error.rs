// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared across the pipeline.

/// Application error type. Any variant reaching `main` ends the run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("Failed to refresh credentials: {0}")]
    CredentialRefresh(String),

    #[error("Gist API error: {0}")]
    GistApi(String),

    #[error("Credential cache error: {0}")]
    Cache(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const STRAVA_RATE_LIMIT: &'static str = "Rate limit exceeded";
    pub const STRAVA_TOKEN_ERROR: &'static str = "Invalid or expired access token";

    /// Whether the error came from Strava rejecting our token.
    pub fn is_strava_token_error(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_TOKEN_ERROR)
    }
}

/// Result type alias for pipeline steps
pub type Result<T> = std::result::Result<T, AppError>;
