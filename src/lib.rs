// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Gist-Stats: publish Strava activity stats to a GitHub Gist
//!
//! A single run refreshes the Strava token, fetches athlete stats and recent
//! activities, renders a fixed-width text report and writes it to a gist.

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod services;
pub mod time_utils;

use config::Config;
use error::Result;
use models::Credentials;
use report::{Report, ReportContext};
use services::strava::RECENT_ACTIVITY_COUNT;
use services::{CredentialCache, GistClient, StravaClient, TokenManager};

/// Refresh credentials, fetch Strava data and build the report.
pub async fn generate_report(config: &Config, ctx: &ReportContext) -> Result<Report> {
    let strava = StravaClient::from_config(config);

    let mut tokens = TokenManager::new(
        &strava,
        CredentialCache::new(&config.auth_cache_path),
        Credentials::new(
            config.strava_access_token.clone(),
            config.strava_refresh_token.clone(),
        ),
    );
    let access_token = tokens.access_token().await?;

    let stats = strava
        .get_athlete_stats(&access_token, config.strava_athlete_id)
        .await?;
    let activities = strava
        .list_recent_activities(&access_token, RECENT_ACTIVITY_COUNT)
        .await?;
    tracing::info!(activities = activities.len(), "Fetched Strava data");

    Ok(report::build_report(&stats, &activities, ctx))
}

/// Run the whole pipeline once: refresh, fetch, format, publish.
pub async fn run(config: &Config, ctx: &ReportContext) -> Result<()> {
    let report = generate_report(config, ctx).await?;

    GistClient::from_config(config)
        .publish(&config.gist_id, &config.gist_title, &report.text())
        .await
}
