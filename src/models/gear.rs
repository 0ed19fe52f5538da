// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Gear metadata and configured distance limits.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Strava prefixes bike gear IDs with "b" (shoes use "g").
pub const BIKE_GEAR_PREFIX: &str = "b";

/// Returns true for bike gear, which is left out of the gear summary.
pub fn is_bike(gear_id: &str) -> bool {
    gear_id.starts_with(BIKE_GEAR_PREFIX)
}

/// Resolved gear metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GearInfo {
    /// Display name
    pub name: String,
    /// Lifetime distance in km
    pub total_km: f64,
}

impl GearInfo {
    /// Stand-in used when Strava cannot tell us about a gear.
    pub fn fallback(gear_id: &str) -> Self {
        Self {
            name: gear_id.to_string(),
            total_km: 0.0,
        }
    }
}

/// Outcome of a single gear lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GearLookup {
    Resolved(GearInfo),
    /// Lookup failed; `status` is the HTTP status when one was received.
    Unavailable { status: Option<u16> },
}

impl GearLookup {
    /// Apply the fallback policy: unavailable gear is named by its ID.
    pub fn into_info(self, gear_id: &str) -> GearInfo {
        match self {
            GearLookup::Resolved(info) => info,
            GearLookup::Unavailable { .. } => GearInfo::fallback(gear_id),
        }
    }
}

/// Gear detail response from `GET /gear/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaGear {
    pub name: Option<String>,
    /// Lifetime distance in meters
    pub distance: Option<f64>,
}

impl StravaGear {
    pub fn into_info(self, gear_id: &str) -> GearInfo {
        GearInfo {
            name: self.name.unwrap_or_else(|| gear_id.to_string()),
            total_km: self.distance.unwrap_or(0.0) / 1000.0,
        }
    }
}

/// Configured maximum distance per gear display name (km).
///
/// A name mapped to `null` or not present at all has no limit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GearLimits(HashMap<String, Option<f64>>);

impl GearLimits {
    /// Load limits from a JSON file, degrading to no limits on any problem.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(limits) => {
                tracing::info!(path = %path.display(), count = limits.len(), "Loaded gear limits");
                limits
            }
            Err(GearLimitsError::IoError(e)) => {
                tracing::debug!(path = %path.display(), error = %e, "No gear limits file, using none");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed gear limits");
                Self::default()
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GearLimitsError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| GearLimitsError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    pub fn load_from_json(json_data: &str) -> Result<Self, GearLimitsError> {
        serde_json::from_str(json_data).map_err(|e| GearLimitsError::ParseError(e.to_string()))
    }

    /// Limit configured for a gear display name.
    pub fn limit_for(&self, gear_name: &str) -> Option<f64> {
        self.0.get(gear_name).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<f64>)> for GearLimits {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Errors from gear limit loading.
#[derive(Debug, thiserror::Error)]
pub enum GearLimitsError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse gear limits: {0}")]
    ParseError(String),
}
