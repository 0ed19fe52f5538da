//! Aggregated gear statistics returned to the dashboard and the CLI.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use super::RunRow;

/// Per-gear distance for the selected period.
///
/// Serialized as a bare number, or as an object when gear extras are on.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum GearSummaryEntry {
    Km(f64),
    Detailed {
        /// Km within the selected period
        km: f64,
        /// Lifetime km reported by Strava
        total_km: f64,
        /// Configured limit, if any
        limit_km: Option<f64>,
    },
}

impl GearSummaryEntry {
    /// Km within the selected period.
    pub fn km(&self) -> f64 {
        match self {
            GearSummaryEntry::Km(km) => *km,
            GearSummaryEntry::Detailed { km, .. } => *km,
        }
    }
}

/// Gear display name -> entry, kept in the order gear first gained distance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GearSummary {
    entries: Vec<(String, GearSummaryEntry)>,
}

impl GearSummary {
    pub fn push(&mut self, name: String, entry: GearSummaryEntry) {
        self.entries.push((name, entry));
    }

    pub fn get(&self, name: &str) -> Option<&GearSummaryEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GearSummaryEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for GearSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

/// Result of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct StatsReport {
    /// Runs with gear, in fetched order
    pub activities: Vec<RunRow>,
    pub gear_summary: GearSummary,
}

/// Totals over the run table, as shown in the dashboard header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunTotals {
    pub runs: usize,
    pub km: f64,
    pub minutes: u64,
    /// Km per calendar year ("YYYY")
    pub km_by_year: BTreeMap<String, f64>,
}

impl RunTotals {
    pub fn from_rows(rows: &[RunRow]) -> Self {
        let mut totals = Self {
            runs: rows.len(),
            ..Self::default()
        };

        for row in rows {
            totals.km += row.km;
            totals.minutes += row.min;
            if let Some(year) = row.date.get(..4) {
                *totals.km_by_year.entry(year.to_string()).or_insert(0.0) += row.km;
            }
        }

        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, km: f64, min: u64) -> RunRow {
        RunRow {
            date: date.to_string(),
            name: "Run".to_string(),
            km,
            min,
            gear: "Pegasus".to_string(),
        }
    }

    #[test]
    fn test_summary_serializes_in_insertion_order() {
        let mut summary = GearSummary::default();
        summary.push("Zoom".to_string(), GearSummaryEntry::Km(1.5));
        summary.push("Asics".to_string(), GearSummaryEntry::Km(2.0));

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"Zoom":1.5,"Asics":2.0}"#);
    }

    #[test]
    fn test_detailed_entry_serializes_null_limit() {
        let entry = GearSummaryEntry::Detailed {
            km: 5.0,
            total_km: 410.25,
            limit_km: None,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({"km": 5.0, "total_km": 410.25, "limit_km": null})
        );
        assert_eq!(entry.km(), 5.0);
    }

    #[test]
    fn test_run_totals() {
        let rows = vec![
            row("2023-12-30", 10.0, 55),
            row("2024-01-02", 5.5, 30),
            row("2024-01-05", 4.5, 25),
        ];

        let totals = RunTotals::from_rows(&rows);
        assert_eq!(totals.runs, 3);
        assert!((totals.km - 20.0).abs() < 1e-9);
        assert_eq!(totals.minutes, 110);
        assert_eq!(totals.km_by_year.get("2023"), Some(&10.0));
        assert_eq!(totals.km_by_year.get("2024"), Some(&10.0));
    }
}
