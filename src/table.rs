// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Console rendering of a stats report.

use std::fmt::Write;

use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::{RunRow, RunTotals, StatsReport};

const HEADERS: [&str; 4] = ["Date", "Name", "Km", "Min"];

/// Render runs as a grid table.
pub fn render_run_table(rows: &[RunRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS.to_vec());

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.date),
            Cell::new(&row.name),
            Cell::new(format!("{:.2}", row.km)).set_alignment(CellAlignment::Right),
            Cell::new(row.min).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n", table)
}

/// Render the "Kilometers by gear" block.
pub fn render_gear_summary(report: &StatsReport) -> String {
    let mut out = String::from("Kilometers by gear:\n");
    for (name, entry) in report.gear_summary.iter() {
        let _ = writeln!(out, "{}: {:.2} km", name, entry.km());
    }
    out
}

/// Render run totals and km per year.
pub fn render_totals(totals: &RunTotals) -> String {
    let mut out = format!(
        "Runs ({}): {:.2} km, {} min\n",
        totals.runs, totals.km, totals.minutes
    );
    if !totals.km_by_year.is_empty() {
        out.push_str("\nYearly km:\n");
        for (year, km) in &totals.km_by_year {
            let _ = writeln!(out, "{}: {:.2} km", year, km);
        }
    }
    out
}

/// Full console report: table, gear summary, totals.
pub fn render_report(report: &StatsReport) -> String {
    let totals = RunTotals::from_rows(&report.activities);
    format!(
        "{}\n{}\n{}",
        render_run_table(&report.activities),
        render_gear_summary(report),
        render_totals(&totals)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GearSummary, GearSummaryEntry};

    fn report() -> StatsReport {
        let mut gear_summary = GearSummary::default();
        gear_summary.push(
            "Pegasus".to_string(),
            GearSummaryEntry::Detailed {
                km: 15.25,
                total_km: 400.0,
                limit_km: Some(800.0),
            },
        );
        StatsReport {
            activities: vec![
                RunRow {
                    date: "2024-01-05".to_string(),
                    name: "Morning run".to_string(),
                    km: 5.0,
                    min: 30,
                    gear: "Pegasus".to_string(),
                },
                RunRow {
                    date: "2024-01-07".to_string(),
                    name: "Long".to_string(),
                    km: 10.25,
                    min: 61,
                    gear: "Pegasus".to_string(),
                },
            ],
            gear_summary,
        }
    }

    #[test]
    fn test_grid_table() {
        let table = render_run_table(&report().activities);
        let lines: Vec<&str> = table.lines().collect();

        // Top border, header, header separator, then row and separator pairs.
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("Date") && lines[1].contains("Min"));
        assert!(lines[2].contains('='));
        assert!(lines[3].contains("| 2024-01-05 | Morning run |"));
        // Km and Min are right-aligned under the widest value.
        assert!(lines[3].contains("|  5.00 |"));
        assert!(lines[3].ends_with("|  30 |"));
        assert!(lines[5].contains("| 2024-01-07 | Long        | 10.25 |  61 |"));
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = render_run_table(&[]);
        assert!(table.contains("Date"));
        assert!(table.contains("Name"));
        assert!(!table.contains("2024"));
    }

    #[test]
    fn test_gear_summary_lines() {
        assert_eq!(
            render_gear_summary(&report()),
            "Kilometers by gear:\nPegasus: 15.25 km\n"
        );
    }

    #[test]
    fn test_totals() {
        let text = render_totals(&RunTotals::from_rows(&report().activities));
        assert!(text.starts_with("Runs (2): 15.25 km, 91 min\n"));
        assert!(text.contains("2024: 15.25 km"));
    }
}
