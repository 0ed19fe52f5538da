// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::AppError;

/// Date format accepted for `after_date` and the CLI prompt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid date '{}': expected YYYY-MM-DD ({})",
            raw, e
        ))
    })
}

/// Unix timestamp for the start (00:00 UTC) of `date`; no date means epoch zero.
pub fn after_timestamp(date: Option<NaiveDate>) -> i64 {
    date.and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

/// January 1 of the year `now` falls in.
pub fn start_of_year(now: DateTime<Utc>) -> NaiveDate {
    let today = now.date_naive();
    today.with_ordinal(1).unwrap_or(today)
}

/// Calendar date part of a Strava local timestamp ("2024-01-05T08:00:00Z" -> "2024-01-05").
pub fn calendar_date(start_date_local: &str) -> &str {
    start_date_local.get(..10).unwrap_or(start_date_local)
}
