// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod aggregator;
pub mod gear;
pub mod stats;
pub mod strava;

pub use activity::ActivityFetcher;
pub use aggregator::{aggregate, AggregateOptions};
pub use gear::GearCache;
pub use stats::{StatsRequest, StatsService};
pub use strava::StravaClient;
