// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gear stats workflow for one invocation.
//!
//! Handles the core workflow:
//! 1. Exchange the refresh token for an access token
//! 2. Fetch all activities after the requested date
//! 3. Resolve each distinct gear once
//! 4. Aggregate into run rows and a gear summary

use std::time::Duration;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{GearLimits, StatsReport};
use crate::services::{aggregate, ActivityFetcher, AggregateOptions, GearCache, StravaClient};

/// Parameters of one stats run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsRequest {
    /// Only activities after this date; `None` means all history.
    pub after_date: Option<NaiveDate>,
    pub page_delay: Duration,
    pub options: AggregateOptions,
}

/// Runs the token -> fetch -> gear -> aggregate pipeline.
///
/// Nothing is kept between runs: each call gets its own token and gear cache.
pub struct StatsService<'a> {
    strava: &'a StravaClient,
    limits: &'a GearLimits,
}

impl<'a> StatsService<'a> {
    pub fn new(strava: &'a StravaClient, limits: &'a GearLimits) -> Self {
        Self { strava, limits }
    }

    pub async fn run(&self, request: StatsRequest) -> Result<StatsReport> {
        tracing::info!(after_date = ?request.after_date, "Building gear stats");

        let token = self.strava.acquire_token().await?;

        let activities = ActivityFetcher::new(self.strava)
            .with_page_delay(request.page_delay)
            .fetch_activities(&token, request.after_date)
            .await?;

        let mut gear = GearCache::new();
        gear.resolve_all(self.strava, &token, &activities).await;

        Ok(aggregate(&activities, &gear, self.limits, request.options))
    }
}
