// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model as returned by `/athlete/activities`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Summary activity from the recent-activities list (newest first).
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySummary {
    /// Activity name/title
    pub name: String,
    /// Start date/time (UTC)
    pub start_date: DateTime<Utc>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: Option<u64>,
}

impl ActivitySummary {
    pub fn distance_meters(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }

    pub fn moving_seconds(&self) -> u64 {
        self.moving_time.unwrap_or(0)
    }
}
