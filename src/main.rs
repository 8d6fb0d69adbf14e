// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Gist-Stats batch job
//!
//! Invoked periodically by a scheduler. Each run publishes a fresh report
//! and exits; any failure exits non-zero.

use strava_gist_stats::{config::Config, report::ReportContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        athlete_id = config.strava_athlete_id,
        gist_id = %config.gist_id,
        units = ?config.units,
        "Starting Strava stats update"
    );

    let ctx = ReportContext::current(config.units);
    if let Err(e) = strava_gist_stats::run(&config, &ctx).await {
        tracing::error!(error = %e, "Strava stats update failed");
        return Err(e.into());
    }

    tracing::info!("Strava stats update complete");
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("strava_gist_stats=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
