// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth credential pair, as persisted in the local cache file.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair.
///
/// Serialized as `{"stravaAccessToken": ..., "stravaRefreshToken": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "stravaAccessToken", default)]
    pub access_token: String,
    #[serde(rename = "stravaRefreshToken", default)]
    pub refresh_token: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Overlay non-empty fields from `other` onto `self`.
    pub fn overlay(&mut self, other: Credentials) {
        if !other.access_token.is_empty() {
            self.access_token = other.access_token;
        }
        if !other.refresh_token.is_empty() {
            self.refresh_token = other.refresh_token;
        }
    }
}
