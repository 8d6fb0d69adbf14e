// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete statistics from Strava's `/athletes/{id}/stats` endpoint.
//!
//! The payload is kept as a raw JSON object so that each discipline's totals
//! can be extracted independently; a malformed entry for one discipline
//! surfaces as a [`StatsError`] for that discipline only.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Sport grouping used by Strava's totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Running,
    Swimming,
    Cycling,
}

impl Discipline {
    /// Report order.
    pub const ALL: [Discipline; 3] = [Self::Running, Self::Swimming, Self::Cycling];

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Swimming => "Swimming",
            Self::Cycling => "Cycling",
        }
    }

    fn key_stem(self) -> &'static str {
        match self {
            Self::Running => "run",
            Self::Swimming => "swim",
            Self::Cycling => "ride",
        }
    }
}

/// Time window of a totals entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalsPeriod {
    /// Trailing four weeks (`recent_*_totals`)
    Recent,
    /// Year to date (`ytd_*_totals`)
    YearToDate,
}

impl TotalsPeriod {
    fn key_prefix(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::YearToDate => "ytd",
        }
    }
}

/// Payload key for a discipline/period pair, e.g. `ytd_run_totals`.
pub fn totals_key(discipline: Discipline, period: TotalsPeriod) -> String {
    format!(
        "{}_{}_totals",
        period.key_prefix(),
        discipline.key_stem()
    )
}

/// Aggregate totals for one discipline and period.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActivityTotals {
    #[serde(default)]
    pub count: u32,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    #[serde(default)]
    pub elapsed_time: u64,
    #[serde(default)]
    pub elevation_gain: f64,
    #[serde(default)]
    pub achievement_count: u32,
}

/// Failure to extract one discipline's totals.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Missing totals key: {0}")]
    MissingKey(String),

    #[error("Malformed totals for {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw athlete stats payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AthleteStats {
    fields: Map<String, Value>,
}

impl AthleteStats {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Extract the totals for one discipline and period.
    pub fn totals(
        &self,
        discipline: Discipline,
        period: TotalsPeriod,
    ) -> Result<ActivityTotals, StatsError> {
        let key = totals_key(discipline, period);
        let value = self
            .fields
            .get(&key)
            .ok_or_else(|| StatsError::MissingKey(key.clone()))?;
        ActivityTotals::deserialize(value).map_err(|source| StatsError::Malformed { key, source })
    }

    /// Totals for every discipline in `period`, in report order.
    pub fn period_totals(
        &self,
        period: TotalsPeriod,
    ) -> impl Iterator<Item = (Discipline, Result<ActivityTotals, StatsError>)> + '_ {
        Discipline::ALL
            .into_iter()
            .map(move |d| (d, self.totals(d, period)))
    }
}
