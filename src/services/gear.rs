// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-run gear cache.
//!
//! Each gear ID is looked up at most once per run. The cache lives only as
//! long as the request or CLI invocation that created it.

use std::collections::HashMap;

use crate::models::{Activity, GearInfo};
use crate::services::StravaClient;

/// Resolved gear, in the order IDs were first seen.
#[derive(Debug, Clone, Default)]
pub struct GearCache {
    entries: Vec<(String, GearInfo)>,
    index: HashMap<String, usize>,
}

impl GearCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every unseen gear ID referenced by `activities`, in order.
    ///
    /// Lookups that fail are cached as the fallback (ID as name, 0 km) so
    /// they are not retried within the run.
    pub async fn resolve_all(
        &mut self,
        client: &StravaClient,
        access_token: &str,
        activities: &[Activity],
    ) {
        for gear_id in activities.iter().filter_map(Activity::gear) {
            if self.contains(gear_id) {
                continue;
            }
            let info = client.get_gear(access_token, gear_id).await.into_info(gear_id);
            tracing::debug!(gear_id, name = %info.name, "Resolved gear");
            self.insert(gear_id.to_string(), info);
        }
    }

    /// Record gear info for an ID. The first insert for an ID wins.
    pub fn insert(&mut self, gear_id: String, info: GearInfo) {
        if self.index.contains_key(&gear_id) {
            return;
        }
        self.index.insert(gear_id.clone(), self.entries.len());
        self.entries.push((gear_id, info));
    }

    pub fn contains(&self, gear_id: &str) -> bool {
        self.index.contains_key(gear_id)
    }

    pub fn get(&self, gear_id: &str) -> Option<&GearInfo> {
        self.index.get(gear_id).map(|&i| &self.entries[i].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GearInfo)> {
        self.entries.iter().map(|(id, info)| (id.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, GearInfo)> for GearCache {
    fn from_iter<I: IntoIterator<Item = (String, GearInfo)>>(iter: I) -> Self {
        let mut cache = Self::new();
        for (id, info) in iter {
            cache.insert(id, info);
        }
        cache
    }
}
