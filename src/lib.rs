// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! McRun stats: distance per pair of shoes from a Strava activity history.
//!
//! This crate fetches activities and gear metadata from Strava, aggregates
//! kilometers per gear over a time window and presents the result either
//! as a console report or as JSON for the dashboard.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod table;
pub mod time_utils;

use config::Config;
use models::GearLimits;
use services::StravaClient;

/// Shared application state.
///
/// Everything in here is read-only; each request builds its own token,
/// gear cache and accumulators.
pub struct AppState {
    pub config: Config,
    pub gear_limits: GearLimits,
    pub strava: StravaClient,
}
