// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod gear;
pub mod stats;

pub use activity::{Activity, RunRow};
pub use gear::{GearInfo, GearLimits, GearLookup, BIKE_GEAR_PREFIX};
pub use stats::{GearSummary, GearSummaryEntry, RunTotals, StatsReport};
