//! Aggregation engine for the analytics view.
//!
//! Turns a report collection into label counts and rankings in a single pass.
//! Rankings are stable: labels with equal counts keep the order in which they
//! were first seen in the input.

use std::collections::HashMap;

use crate::model::{AggregationResult, LabelCount, Report, status, urgency};

/// Bucket for reports whose label is missing or empty.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Maximum number of entries in [`AggregationResult::top_stations`].
pub const TOP_STATIONS_LIMIT: usize = 10;

/// Label counter that remembers first-encounter order.
#[derive(Debug, Default)]
struct Tally {
    entries: Vec<LabelCount>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(LabelCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    fn to_map(&self) -> HashMap<String, usize> {
        self.entries
            .iter()
            .map(|e| (e.label.clone(), e.count))
            .collect()
    }

    /// Entries sorted by descending count; `sort_by` is stable.
    fn ranked(&self) -> Vec<LabelCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

fn label_or_unknown(label: Option<&str>) -> &str {
    label.unwrap_or(UNKNOWN_LABEL)
}

/// Composite station key, `"Name (City)"`.
pub fn station_key(report: &Report) -> String {
    format!(
        "{} ({})",
        label_or_unknown(report.station()),
        label_or_unknown(report.city())
    )
}

/// Percentage of `part` in `total`, rounded to one decimal place.
///
/// Returns 0 when `total` is 0.
pub fn rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = part as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Compute summary statistics for a report collection.
pub fn aggregate(reports: &[Report]) -> AggregationResult {
    let mut by_status = Tally::default();
    let mut by_urgency = Tally::default();
    let mut by_category = Tally::default();
    let mut by_city = Tally::default();
    let mut by_station = Tally::default();

    for report in reports {
        by_status.add(label_or_unknown(report.status()));
        by_urgency.add(label_or_unknown(report.urgency()));
        by_category.add(label_or_unknown(report.category()));
        by_city.add(label_or_unknown(report.city()));
        by_station.add(&station_key(report));
    }

    let total = reports.len();
    let category_ranking = by_category.ranked();
    let mut top_stations = by_station.ranked();
    top_stations.truncate(TOP_STATIONS_LIMIT);

    let critical_count = by_urgency.get(urgency::CRITICAL);
    let resolved_count = by_status.get(status::RESOLVED);
    let pending_count = by_status.get(status::SUBMITTED) + by_status.get(status::UNDER_REVIEW);

    AggregationResult {
        total,
        by_status: by_status.to_map(),
        by_urgency: by_urgency.to_map(),
        by_category: by_category.to_map(),
        by_city: by_city.to_map(),
        by_station: by_station.to_map(),
        top_category: category_ranking.first().cloned(),
        top_station: top_stations.first().cloned(),
        category_ranking,
        urgency_breakdown: by_urgency.entries,
        city_breakdown: by_city.entries,
        top_stations,
        critical_count,
        resolved_count,
        pending_count,
        resolution_rate: rate(resolved_count, total),
    }
}
