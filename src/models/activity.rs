// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model and the run rows derived from it.

use serde::{Deserialize, Serialize};

use crate::time_utils::calendar_date;

/// Summary activity as returned by `GET /athlete/activities`.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    #[serde(default)]
    pub id: u64,
    /// Activity name/title
    pub name: String,
    /// Activity type (Run, Ride, Walk, etc.)
    #[serde(rename = "type", default)]
    pub activity_type: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Local start date/time, e.g. "2024-01-05T08:00:00Z"
    pub start_date_local: String,
    /// Gear used, if any was logged
    #[serde(default)]
    pub gear_id: Option<String>,
}

impl Activity {
    /// Gear ID, treating an empty string as no gear.
    pub fn gear(&self) -> Option<&str> {
        self.gear_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_run(&self) -> bool {
        self.activity_type == "Run"
    }

    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    /// Whole minutes of moving time (floor).
    pub fn moving_minutes(&self) -> u64 {
        self.moving_time / 60
    }
}

/// One row of the run table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRow {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub name: String,
    /// Distance in km, rounded to 2 decimals
    pub km: f64,
    /// Moving time in whole minutes
    pub min: u64,
    /// Gear display name
    pub gear: String,
}

impl RunRow {
    pub fn from_activity(activity: &Activity, gear_name: &str) -> Self {
        Self {
            date: calendar_date(&activity.start_date_local).to_string(),
            name: activity.name.clone(),
            km: round2(activity.distance_km()),
            min: activity.moving_minutes(),
            gear: gear_name.to_string(),
        }
    }
}

/// Round to 2 decimal places.
///
/// Goes through decimal formatting so the exact binary value decides ties
/// (1.115 is stored just below 1.115 and rounds to 1.11).
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
