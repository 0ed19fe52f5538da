// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Refresh-token exchange for a short-lived access token
//! - Paged activity listing
//! - Gear lookups (never fatal)

use crate::config::Config;
use crate::error::AppError;
use crate::models::gear::StravaGear;
use crate::models::{Activity, GearLookup};
use serde::Deserialize;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    oauth_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.strava_api_url.trim_end_matches('/').to_string(),
            oauth_url: config.strava_oauth_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
        }
    }

    /// Exchange the configured refresh token for an access token.
    ///
    /// Nothing is cached; every call hits the token endpoint.
    pub async fn acquire_token(&self) -> Result<String, AppError> {
        let response = self
            .http
            .post(&self.oauth_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "refresh_token"),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::UpstreamAuth {
                status: None,
                body: format!("Token refresh request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Strava token exchange failed");
            return Err(AppError::UpstreamAuth {
                status: Some(status.as_u16()),
                body,
            });
        }

        let token: TokenRefreshResponse =
            response.json().await.map_err(|e| AppError::UpstreamAuth {
                status: None,
                body: format!("Failed to parse token response: {}", e),
            })?;

        tracing::debug!("Strava access token acquired");
        Ok(token.access_token)
    }

    /// List one page of activities started after `after` (Unix timestamp).
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[
                ("after", after.to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::UpstreamFetch(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
            }

            return Err(AppError::UpstreamFetch(format!(
                "page {}: HTTP {}: {}",
                page, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::UpstreamFetch(format!("page {}: JSON parse error: {}", page, e)))
    }

    /// Look up a gear by ID.
    ///
    /// Failures are reported as [`GearLookup::Unavailable`], never as errors.
    pub async fn get_gear(&self, access_token: &str, gear_id: &str) -> GearLookup {
        let url = format!("{}/gear/{}", self.base_url, gear_id);

        let response = match self.http.get(&url).bearer_auth(access_token).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(gear_id, error = %e, "Gear lookup request failed");
                return GearLookup::Unavailable { status: None };
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(gear_id, status = %status, "Gear lookup failed");
            return GearLookup::Unavailable {
                status: Some(status.as_u16()),
            };
        }

        match response.json::<StravaGear>().await {
            Ok(gear) => GearLookup::Resolved(gear.into_info(gear_id)),
            Err(e) => {
                tracing::warn!(gear_id, error = %e, "Gear response parse error");
                GearLookup::Unavailable {
                    status: Some(status.as_u16()),
                }
            }
        }
    }
}

/// Token refresh response from Strava.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
}
