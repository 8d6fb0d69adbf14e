// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava credential lifecycle for a single run.
//!
//! Strava rotates the refresh token on every refresh, so once a cache file
//! exists it is the only copy of a usable refresh token. The cache is read
//! optimistically (any failure falls back to configured tokens) and written
//! authoritatively after each successful refresh.

use crate::error::AppError;
use crate::models::Credentials;
use crate::services::strava::StravaClient;
use std::fs;
use std::path::{Path, PathBuf};

/// Failure reading the credential cache.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON file holding the most recently rotated credentials.
#[derive(Debug, Clone)]
pub struct CredentialCache {
    path: PathBuf,
}

impl CredentialCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load cached credentials. `Ok(None)` if the file does not exist.
    pub fn load(&self) -> Result<Option<Credentials>, CacheError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&data)
            .map(Some)
            .map_err(|source| CacheError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Persist credentials, creating the containing directory if needed.
    pub fn save(&self, credentials: &Credentials) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::Cache(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(credentials).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to serialize credentials: {}", e))
        })?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::Cache(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

/// Produces a fresh access token for the current run.
pub struct TokenManager<'a> {
    client: &'a StravaClient,
    cache: CredentialCache,
    credentials: Credentials,
}

impl<'a> TokenManager<'a> {
    /// Start from the configured fallback credentials.
    pub fn new(client: &'a StravaClient, cache: CredentialCache, fallback: Credentials) -> Self {
        Self {
            client,
            cache,
            credentials: fallback,
        }
    }

    /// Current in-memory credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Overlay cached credentials onto the fallback values.
    ///
    /// Read and parse failures are logged and otherwise ignored.
    pub fn load_cached(&mut self) {
        match self.cache.load() {
            Ok(Some(cached)) => {
                tracing::debug!(path = %self.cache.path().display(), "Loaded cached credentials");
                self.credentials.overlay(cached);
            }
            Ok(None) => {
                tracing::info!(
                    path = %self.cache.path().display(),
                    "No credential cache, using configured tokens"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable credential cache");
            }
        }
    }

    /// Refresh the token pair and persist it.
    ///
    /// Strava is asked for a new pair on every call, regardless of whether
    /// the current access token is still valid.
    pub async fn refresh(&mut self) -> Result<&Credentials, AppError> {
        if self.credentials.refresh_token.is_empty() {
            return Err(AppError::Config(
                "no Strava refresh token in cache or STRAVA_REFRESH_TOKEN".to_string(),
            ));
        }

        let response = self
            .client
            .refresh_token(&self.credentials.refresh_token)
            .await?;

        let (access_token, refresh_token) = match (response.access_token, response.refresh_token)
        {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                (access, refresh)
            }
            _ => {
                return Err(AppError::CredentialRefresh(
                    "response is missing access_token or refresh_token".to_string(),
                ))
            }
        };

        self.credentials = Credentials::new(access_token, refresh_token);
        self.cache.save(&self.credentials)?;

        tracing::info!(
            expires_at = response.expires_at,
            path = %self.cache.path().display(),
            "Strava token refreshed and cached"
        );
        Ok(&self.credentials)
    }

    /// Load the cache, refresh, and return the new access token.
    pub async fn access_token(&mut self) -> Result<String, AppError> {
        self.load_cached();
        let credentials = self.refresh().await?;
        Ok(credentials.access_token.clone())
    }
}
