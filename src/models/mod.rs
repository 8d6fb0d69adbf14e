// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the Strava payloads and the local credential cache.

pub mod activity;
pub mod credentials;
pub mod stats;

pub use activity::ActivitySummary;
pub use credentials::Credentials;
pub use stats::{ActivityTotals, AthleteStats, Discipline, StatsError, TotalsPeriod};
