// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - external API clients and credential management.

pub mod gist;
pub mod strava;
pub mod token_cache;

pub use gist::GistClient;
pub use strava::StravaClient;
pub use token_cache::{CredentialCache, TokenManager};
