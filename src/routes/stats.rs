// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gear stats endpoint for the dashboard.

use crate::error::Result;
use crate::models::StatsReport;
use crate::services::{AggregateOptions, StatsRequest, StatsService};
use crate::time_utils::{parse_date, start_of_year};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Stats routes. `/api/stats` is the path the dashboard proxies to.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_stats))
        .route("/api/stats", get(get_stats))
}

#[derive(Deserialize)]
struct StatsQuery {
    /// Start date (YYYY-MM-DD); defaults to January 1 of the current year
    after_date: Option<String>,
}

/// Runs and per-gear km since `after_date`.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsReport>> {
    // A blank `after_date=` counts as omitted.
    let after_date = match params
        .after_date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(raw) => parse_date(raw)?,
        None => start_of_year(chrono::Utc::now()),
    };

    tracing::debug!(%after_date, "Fetching gear stats");

    let request = StatsRequest {
        after_date: Some(after_date),
        page_delay: state.config.page_delay,
        options: AggregateOptions {
            include_gear_extras: state.config.include_gear_extras,
        },
    };

    let report = StatsService::new(&state.strava, &state.gear_limits)
        .run(request)
        .await?;

    Ok(Json(report))
}
