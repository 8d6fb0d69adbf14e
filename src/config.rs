// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job configuration loaded from environment variables.
//!
//! The scheduler injects secrets as environment variables, so everything is
//! read once at startup into an immutable [`Config`] that is passed by
//! reference into each pipeline step.

use std::env;
use std::path::PathBuf;

const DEFAULT_STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";
const DEFAULT_STRAVA_OAUTH_URL: &str = "https://www.strava.com/oauth/token";
const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_AUTH_CACHE: &str = "cache/strava-auth.json";
const DEFAULT_GIST_TITLE: &str = "Strava Stats";

/// Unit system used everywhere in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

impl MeasurementSystem {
    /// Parse the `UNITS` setting. Only `miles` selects imperial.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("miles") => Self::Imperial,
            _ => Self::Metric,
        }
    }

    /// Multiplier from meters to the display unit.
    pub fn factor(self) -> f64 {
        match self {
            Self::Metric => 0.001,
            Self::Imperial => 0.000621371192,
        }
    }

    /// Display unit suffix.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
        }
    }
}

/// Job configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- GitHub ---
    /// Token with `gist` scope
    pub github_token: String,
    /// Gist that receives the report
    pub gist_id: String,
    /// File name written to the gist
    pub gist_title: String,
    pub github_api_base: String,

    // --- Strava ---
    pub strava_athlete_id: u64,
    pub strava_client_id: String,
    pub strava_client_secret: String,
    /// Fallback access token used when no cache exists
    pub strava_access_token: String,
    /// Fallback refresh token used when no cache exists
    pub strava_refresh_token: String,
    pub strava_api_base: String,
    pub strava_oauth_url: String,

    // --- Local state ---
    /// Path of the rotated-credential cache
    pub auth_cache_path: PathBuf,
    pub units: MeasurementSystem,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let athlete_id = required("STRAVA_ATHLETE_ID")?;
        let strava_athlete_id = athlete_id
            .parse()
            .map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid("STRAVA_ATHLETE_ID", e.to_string())
            })?;

        Ok(Self {
            github_token: required("GITHUB_TOKEN")?,
            gist_id: required("GIST_ID")?,
            gist_title: optional("GIST_TITLE", DEFAULT_GIST_TITLE),
            github_api_base: optional("GITHUB_API_BASE", DEFAULT_GITHUB_API_BASE),

            strava_athlete_id,
            strava_client_id: required("STRAVA_CLIENT_ID")?,
            strava_client_secret: required("STRAVA_CLIENT_SECRET")?,
            strava_access_token: optional("STRAVA_ACCESS_TOKEN", ""),
            strava_refresh_token: optional("STRAVA_REFRESH_TOKEN", ""),
            strava_api_base: optional("STRAVA_API_BASE", DEFAULT_STRAVA_API_BASE),
            strava_oauth_url: optional("STRAVA_OAUTH_URL", DEFAULT_STRAVA_OAUTH_URL),

            auth_cache_path: PathBuf::from(optional("STRAVA_AUTH_CACHE", DEFAULT_AUTH_CACHE)),
            units: MeasurementSystem::from_setting(lookup("UNITS").as_deref()),
        })
    }

    /// Config for tests only; endpoints point at an unroutable host.
    pub fn test_default() -> Self {
        Self {
            github_token: "test_github_token".to_string(),
            gist_id: "test_gist".to_string(),
            gist_title: DEFAULT_GIST_TITLE.to_string(),
            github_api_base: "http://127.0.0.1:9".to_string(),
            strava_athlete_id: 12345,
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_access_token: "test_access".to_string(),
            strava_refresh_token: "test_refresh".to_string(),
            strava_api_base: "http://127.0.0.1:9".to_string(),
            strava_oauth_url: "http://127.0.0.1:9/oauth/token".to_string(),
            auth_cache_path: PathBuf::from(DEFAULT_AUTH_CACHE),
            units: MeasurementSystem::Metric,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
