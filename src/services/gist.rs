// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GitHub Gist client used to publish the report.

use crate::config::Config;
use crate::error::AppError;
use serde::Deserialize;
use std::collections::BTreeMap;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub Gist API client.
#[derive(Clone)]
pub struct GistClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GistClient {
    pub fn new(base_url: impl Into<String>, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.github_api_base.clone(), config.github_token.clone())
    }

    /// Fetch a gist by ID.
    pub async fn get_gist(&self, gist_id: &str) -> Result<Gist, AppError> {
        let url = format!("{}/gists/{}", self.base_url, gist_id);
        let response = self
            .request(self.http.get(&url))
            .send()
            .await
            .map_err(|e| AppError::GistApi(e.to_string()))?;

        let response = check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::GistApi(format!("JSON parse error: {}", e)))
    }

    /// Replace one file of a gist, renaming it to `new_filename`.
    pub async fn update_file(
        &self,
        gist_id: &str,
        filename: &str,
        new_filename: &str,
        content: &str,
    ) -> Result<(), AppError> {
        let url = format!("{}/gists/{}", self.base_url, gist_id);
        let body = serde_json::json!({
            "files": {
                filename: {
                    "filename": new_filename,
                    "content": content,
                }
            }
        });

        let response = self
            .request(self.http.patch(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::GistApi(e.to_string()))?;

        check_response(response).await?;
        Ok(())
    }

    /// Publish `content` into the gist's single file under `title`.
    ///
    /// The current file name is looked up first so that a rename on the
    /// GitHub side does not break the update.
    pub async fn publish(&self, gist_id: &str, title: &str, content: &str) -> Result<(), AppError> {
        let gist = self.get_gist(gist_id).await.inspect_err(|e| {
            tracing::error!(gist_id, error = %e, "Unable to get gist");
        })?;

        let filename = gist.primary_filename().ok_or_else(|| {
            tracing::error!(gist_id, "Gist has no files");
            AppError::GistApi("gist has no files".to_string())
        })?;

        self.update_file(gist_id, filename, title, content)
            .await
            .inspect_err(|e| {
                tracing::error!(gist_id, filename, error = %e, "Unable to update gist");
            })?;

        tracing::info!(gist_id, filename = title, bytes = content.len(), "Gist updated");
        Ok(())
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
    }
}

/// Return the response if successful, or an error with status and body.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::GistApi(format!("HTTP {}: {}", status, body)))
}

/// Gist as returned by `GET /gists/{id}`. Only the file names are used.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    #[serde(default)]
    pub files: BTreeMap<String, serde_json::Value>,
}

impl Gist {
    /// Name of the file to overwrite.
    pub fn primary_filename(&self) -> Option<&str> {
        self.files.keys().next().map(String::as_str)
    }
}
