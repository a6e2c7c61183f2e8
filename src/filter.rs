//! Filter engine for the report list view.
//!
//! Constraints are evaluated in a fixed order: status, urgency, city, then the
//! free-text search. A report is kept only when every active constraint holds.

use crate::model::{FilterSpec, Report};

impl FilterSpec {
    /// Returns true when `report` satisfies every active constraint.
    ///
    /// A report missing a constrained label fails that constraint.
    pub fn matches(&self, report: &Report) -> bool {
        label_matches(self.status_constraint(), report.status())
            && label_matches(self.urgency_constraint(), report.urgency())
            && label_matches(self.city_constraint(), report.city())
            && self
                .search_text()
                .is_none_or(|search| matches_search(report, &search.to_lowercase()))
    }
}

fn label_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.is_none_or(|w| actual == Some(w))
}

/// Substring match of the lowercased needle against station, description and category.
fn matches_search(report: &Report, needle: &str) -> bool {
    [report.station(), report.description(), report.category()]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(needle))
}

/// Keep the reports that satisfy `spec`, in their original order.
pub fn filter_reports(reports: &[Report], spec: &FilterSpec) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| spec.matches(report))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{UNKNOWN_LABEL, aggregate};
    use crate::model::{status, urgency};

    fn sample_reports() -> Vec<Report> {
        vec![
            Report::new(
                "1",
                status::RESOLVED,
                urgency::CRITICAL,
                "Elevator Outage",
                "Central",
                "Calgary",
                "Elevator stuck between floors",
            ),
            Report::new(
                "2",
                status::SUBMITTED,
                urgency::LOW,
                "Signage",
                "Central",
                "Calgary",
                "Faded wayfinding signs",
            ),
            Report::new(
                "3",
                status::IN_PROGRESS,
                urgency::HIGH,
                "Ramp Access",
                "Churchill",
                "Edmonton",
                "Ramp surface is cracked",
            ),
            Report::new(
                "4",
                status::RESOLVED,
                urgency::MEDIUM,
                "Tactile Paving",
                "Rampart Park",
                "Edmonton",
                "Missing tactile strip",
            ),
        ]
    }

    fn ids(reports: &[Report]) -> Vec<&str> {
        reports.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_spec_returns_everything_in_order() {
        let reports = sample_reports();
        let filtered = filter_reports(&reports, &FilterSpec::default());
        assert_eq!(filtered, reports);
    }

    #[test]
    fn test_all_sentinel_is_no_constraint() {
        let reports = sample_reports();
        let spec = FilterSpec::default()
            .with_status("all")
            .with_urgency("all")
            .with_city("all");
        assert_eq!(filter_reports(&reports, &spec).len(), 4);
    }

    #[test]
    fn test_status_filter() {
        let reports = sample_reports();
        let spec = FilterSpec::default().with_status(status::RESOLVED);
        assert_eq!(ids(&filter_reports(&reports, &spec)), vec!["1", "4"]);
    }

    #[test]
    fn test_urgency_filter() {
        let reports = sample_reports();
        let spec = FilterSpec::default().with_urgency(urgency::HIGH);
        assert_eq!(ids(&filter_reports(&reports, &spec)), vec!["3"]);
    }

    #[test]
    fn test_city_and_status_combined() {
        let reports = sample_reports();
        let spec = FilterSpec::default()
            .with_city("Calgary")
            .with_status(status::RESOLVED);
        assert_eq!(ids(&filter_reports(&reports, &spec)), vec!["1"]);
    }

    #[test]
    fn test_search_matches_station_description_or_category() {
        let reports = sample_reports();

        // "ramp" hits category of 3, description of 3 and station name of 4
        let spec = FilterSpec::default().with_search("ramp");
        assert_eq!(ids(&filter_reports(&reports, &spec)), vec!["3", "4"]);

        let spec = FilterSpec::default().with_search("wayfinding");
        assert_eq!(ids(&filter_reports(&reports, &spec)), vec!["2"]);

        let spec = FilterSpec::default().with_search("elevator outage");
        assert_eq!(ids(&filter_reports(&reports, &spec)), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let reports = sample_reports();
        let lower = filter_reports(&reports, &FilterSpec::default().with_search("ramp"));
        let upper = filter_reports(&reports, &FilterSpec::default().with_search("RAMP"));
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_narrows_other_constraints() {
        let reports = sample_reports();
        let spec = FilterSpec::default()
            .with_city("Edmonton")
            .with_status(status::RESOLVED)
            .with_search("ramp");
        assert_eq!(ids(&filter_reports(&reports, &spec)), vec!["4"]);

        let spec = FilterSpec::default()
            .with_city("Calgary")
            .with_search("ramp");
        assert!(filter_reports(&reports, &spec).is_empty());
    }

    #[test]
    fn test_missing_fields_fail_constraints() {
        let reports = vec![Report {
            id: "bare".to_string(),
            ..Default::default()
        }];

        assert_eq!(filter_reports(&reports, &FilterSpec::default()).len(), 1);
        let spec = FilterSpec::default().with_status("Submitted");
        assert!(filter_reports(&reports, &spec).is_empty());
        assert!(filter_reports(&reports, &FilterSpec::default().with_search("x")).is_empty());
    }

    #[test]
    fn test_unknown_bucket_is_not_a_filter_value() {
        let mut reports = sample_reports();
        reports.push(Report {
            id: "bare".to_string(),
            ..Default::default()
        });

        let summary = aggregate(&reports);
        assert_eq!(summary.by_status.get(UNKNOWN_LABEL), Some(&1));
        assert_eq!(summary.by_city.get(UNKNOWN_LABEL), Some(&1));

        let spec = FilterSpec::default().with_status(UNKNOWN_LABEL);
        assert!(filter_reports(&reports, &spec).is_empty());
        let spec = FilterSpec::default().with_city(UNKNOWN_LABEL);
        assert!(filter_reports(&reports, &spec).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let spec = FilterSpec::default().with_status(status::RESOLVED);
        assert!(filter_reports(&[], &spec).is_empty());
    }
}
