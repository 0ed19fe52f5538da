// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gear distance aggregation.
//!
//! A single pass over the fetched activities produces:
//! 1. The run table (runs with gear only)
//! 2. Km per gear display name for the period (bikes excluded)
//!
//! Gear is keyed by display name, so two IDs sharing a name are merged.

use std::collections::HashMap;

use crate::models::activity::round2;
use crate::models::gear::is_bike;
use crate::models::{
    Activity, GearInfo, GearLimits, GearSummary, GearSummaryEntry, RunRow, StatsReport,
};
use crate::services::GearCache;

/// Aggregation settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Attach lifetime km and configured limits to each summary entry.
    pub include_gear_extras: bool,
}

/// Aggregate activities into run rows and a per-gear summary.
///
/// Pure: the same activities and cache always give the same report.
pub fn aggregate(
    activities: &[Activity],
    gear: &GearCache,
    limits: &GearLimits,
    options: AggregateOptions,
) -> StatsReport {
    let mut rows = Vec::new();
    // name -> km, in the order names first gained distance
    let mut gear_km: Vec<(String, f64)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for activity in activities {
        let Some(gear_id) = activity.gear() else {
            continue;
        };
        let info = gear
            .get(gear_id)
            .cloned()
            .unwrap_or_else(|| GearInfo::fallback(gear_id));

        if !is_bike(gear_id) {
            let pos = *positions.entry(info.name.clone()).or_insert_with(|| {
                gear_km.push((info.name.clone(), 0.0));
                gear_km.len() - 1
            });
            gear_km[pos].1 += activity.distance_km();
        }

        if activity.is_run() {
            rows.push(RunRow::from_activity(activity, &info.name));
        }
    }

    let lifetime = lifetime_km_by_name(gear);
    let mut gear_summary = GearSummary::default();
    for (name, km) in gear_km {
        let entry = if options.include_gear_extras {
            GearSummaryEntry::Detailed {
                km: round2(km),
                total_km: round2(lifetime.get(name.as_str()).copied().unwrap_or(0.0)),
                limit_km: limits.limit_for(&name),
            }
        } else {
            GearSummaryEntry::Km(round2(km))
        };
        gear_summary.push(name, entry);
    }

    tracing::debug!(
        runs = rows.len(),
        gear = gear_summary.len(),
        "Aggregated activities"
    );

    StatsReport {
        activities: rows,
        gear_summary,
    }
}

/// Lifetime km per display name.
///
/// When several IDs share a name, the ID seen last in the cache wins.
fn lifetime_km_by_name(gear: &GearCache) -> HashMap<&str, f64> {
    let mut by_name = HashMap::new();
    for (_, info) in gear.iter() {
        by_name.insert(info.name.as_str(), info.total_km);
    }
    by_name
}
