// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity fetching with transparent pagination.

use std::time::Duration;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::Activity;
use crate::services::StravaClient;
use crate::time_utils::after_timestamp;

/// Activities requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Fetches every activity after a date boundary, one page at a time.
pub struct ActivityFetcher<'a> {
    client: &'a StravaClient,
    page_delay: Duration,
}

impl<'a> ActivityFetcher<'a> {
    pub fn new(client: &'a StravaClient) -> Self {
        Self {
            client,
            page_delay: Duration::ZERO,
        }
    }

    /// Pause between page requests.
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Fetch all activities started after `after_date` (all history if `None`).
    ///
    /// Pages are requested from 1 upward until an empty page comes back.
    /// A failed page aborts the whole fetch.
    pub async fn fetch_activities(
        &self,
        access_token: &str,
        after_date: Option<NaiveDate>,
    ) -> Result<Vec<Activity>> {
        let after = after_timestamp(after_date);
        let mut activities = Vec::new();
        let mut page = 1;

        loop {
            tracing::debug!(page, after, "Requesting activities page");
            let batch = self
                .client
                .list_activities(access_token, after, page, PAGE_SIZE)
                .await?;
            tracing::info!(page, count = batch.len(), "Fetched activities page");

            if batch.is_empty() {
                break;
            }
            activities.extend(batch);

            if !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
            page += 1;
        }

        tracing::info!(total = activities.len(), pages = page, "Activity fetch complete");
        Ok(activities)
    }
}
